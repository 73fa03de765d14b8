//! Candidate attributes as seen by the targeting pipeline.

use std::str::FromStr;

use camp_core::{CampError, Gender, DAYS_PER_YEAR};
use rustc_hash::{FxHashMap, FxHashSet};

// ── DiseaseState ──────────────────────────────────────────────────────────────

/// The coarse disease state a qualification check can key on.
///
/// Parsed from configuration tokens; an unknown token is a configuration
/// error surfaced before the simulation starts, never at tick time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum DiseaseState {
    #[default]
    Susceptible,
    Infected,
    Symptomatic,
    Recovered,
}

impl FromStr for DiseaseState {
    type Err = CampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Susceptible" => Ok(DiseaseState::Susceptible),
            "Infected"    => Ok(DiseaseState::Infected),
            "Symptomatic" => Ok(DiseaseState::Symptomatic),
            "Recovered"   => Ok(DiseaseState::Recovered),
            _ => Err(CampError::UnknownDiseaseState { value: s.to_string() }),
        }
    }
}

// ── PropertyMap ───────────────────────────────────────────────────────────────

/// Key/value properties attached to a candidate or a unit
/// (e.g. `Risk=High`, `Accessibility=Easy`).
#[derive(Clone, Debug, Default)]
pub struct PropertyMap {
    inner: FxHashMap<String, String>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// `true` if the property `key` is present with exactly `value`.
    pub fn matches(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

// ── CandidateAttributes ───────────────────────────────────────────────────────

/// Everything the scheduling core reads about one candidate.
///
/// Owned by the unit's [`Population`][crate::Population]; the core references
/// candidates by identity only and never holds attributes across ticks.
#[derive(Clone, Debug)]
pub struct CandidateAttributes {
    /// Age in days (user-facing parameters are in years).
    pub age_days: f32,
    pub gender: Gender,
    pub disease_state: DiseaseState,
    /// `false` while the candidate is away from their home unit.
    pub resident: bool,
    pub properties: PropertyMap,
    /// Names of payloads already applied — backs re-application rejection.
    pub received: FxHashSet<String>,
}

impl CandidateAttributes {
    pub fn new(age_years: f32, gender: Gender) -> Self {
        Self {
            age_days: age_years * DAYS_PER_YEAR,
            gender,
            disease_state: DiseaseState::Susceptible,
            resident: true,
            properties: PropertyMap::new(),
            received: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn age_years(&self) -> f32 {
        self.age_days / DAYS_PER_YEAR
    }
}
