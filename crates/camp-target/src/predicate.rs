//! `Qualification` and the composed `TargetingPredicate`.

use camp_core::{CampResult, UnitRng};
use camp_units::{CandidateAttributes, DiseaseState, PropertyMap};
use rustc_hash::FxHashSet;

use crate::{DemographicRestrictions, PropertyRestrictions};

// ── Qualification ─────────────────────────────────────────────────────────────

/// Disease-state qualification: the candidate's state must be one of the
/// configured states.  Empty means everyone qualifies.
///
/// Built from configuration tokens; an unknown token fails at configure time
/// ([`from_tokens`][Self::from_tokens]), never at tick time.
#[derive(Clone, Debug, Default)]
pub struct Qualification {
    states: FxHashSet<DiseaseState>,
}

impl Qualification {
    /// No restriction.
    pub fn any() -> Self {
        Self::default()
    }

    /// Parse configuration tokens, failing on the first unknown one.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> CampResult<Self> {
        let mut states = FxHashSet::default();
        for token in tokens {
            states.insert(token.as_ref().parse::<DiseaseState>()?);
        }
        Ok(Self { states })
    }

    pub fn qualifies(&self, attrs: &CandidateAttributes) -> bool {
        self.states.is_empty() || self.states.contains(&attrs.disease_state)
    }
}

// ── TargetingPredicate ────────────────────────────────────────────────────────

/// The composed eligibility filter: node properties, then demographics, then
/// disease state, short-circuiting at the first failing stage.
///
/// Only the demographic stage's coverage draw consumes randomness; the
/// ordering therefore also fixes the RNG draw sequence — a candidate rejected
/// by node properties never touches the stream.
#[derive(Clone, Debug, Default)]
pub struct TargetingPredicate {
    pub node_properties:       PropertyRestrictions,
    /// Restrictions on the candidate's own properties.  Deterministic, so it
    /// runs before the coverage draw.
    pub candidate_properties:  PropertyRestrictions,
    pub demographic:           DemographicRestrictions,
    pub qualification:         Qualification,
}

impl TargetingPredicate {
    pub fn new(
        node_properties: PropertyRestrictions,
        demographic:     DemographicRestrictions,
        qualification:   Qualification,
    ) -> Self {
        Self {
            node_properties,
            candidate_properties: PropertyRestrictions::new(),
            demographic,
            qualification,
        }
    }

    /// Evaluate all stages for one candidate in `unit_properties`' unit.
    pub fn evaluate(
        &self,
        unit_properties: &PropertyMap,
        attrs:           &CandidateAttributes,
        rng:             &mut UnitRng,
    ) -> bool {
        self.node_properties.qualifies(unit_properties)
            && self.candidate_properties.qualifies(&attrs.properties)
            && self.demographic.is_qualified(attrs, rng)
            && self.qualification.qualifies(attrs)
    }

    /// The node-property stage alone — used for node-level recipients, where
    /// the demographic and disease stages have no subject.
    pub fn evaluate_unit(&self, unit_properties: &PropertyMap) -> bool {
        self.node_properties.qualifies(unit_properties)
    }
}
