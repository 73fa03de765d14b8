//! Demographic restrictions — coverage, gender, and age bounds.

use camp_core::{CampError, CampResult, TargetGender, UnitRng, DAYS_PER_YEAR, MAX_AGE_YEARS};
use camp_units::CandidateAttributes;

/// Coverage, gender, age-bound, and residency restrictions applied to
/// individual candidates.
///
/// Coverage is a single Bernoulli draw per evaluated candidate; coverage 1.0
/// bypasses the draw entirely so it neither perturbs the RNG stream nor costs
/// anything on the common full-coverage path.
#[derive(Clone, Debug)]
pub struct DemographicRestrictions {
    coverage:       f32,
    gender:         TargetGender,
    min_age_years:  f32,
    max_age_years:  f32,
    residents_only: bool,
}

impl Default for DemographicRestrictions {
    fn default() -> Self {
        Self {
            coverage:       1.0,
            gender:         TargetGender::All,
            min_age_years:  0.0,
            max_age_years:  MAX_AGE_YEARS,
            residents_only: false,
        }
    }
}

impl DemographicRestrictions {
    /// Validated constructor; every parameter is checked at configure time.
    pub fn new(
        coverage:       f32,
        gender:         TargetGender,
        min_age_years:  f32,
        max_age_years:  f32,
        residents_only: bool,
    ) -> CampResult<Self> {
        if !(0.0..=1.0).contains(&coverage) {
            return Err(CampError::InvalidCoverage { value: coverage });
        }
        if min_age_years >= max_age_years {
            return Err(CampError::InvalidRange {
                param: "target_age",
                min:   min_age_years,
                max:   max_age_years,
            });
        }
        Ok(Self { coverage, gender, min_age_years, max_age_years, residents_only })
    }

    /// `true` if nothing is restricted — required to reject demographic
    /// restrictions combined with node-level payloads, where they would
    /// silently do nothing.
    pub fn is_default(&self) -> bool {
        self.coverage == 1.0
            && self.gender == TargetGender::All
            && self.min_age_years == 0.0
            && self.max_age_years == MAX_AGE_YEARS
            && !self.residents_only
    }

    pub fn coverage(&self) -> f32 {
        self.coverage
    }

    /// Evaluate the restrictions against one candidate.
    ///
    /// The deterministic checks run first; the coverage draw happens last so
    /// a candidate rejected on age or gender consumes no randomness.
    pub fn is_qualified(&self, attrs: &CandidateAttributes, rng: &mut UnitRng) -> bool {
        if self.residents_only && !attrs.resident {
            return false;
        }
        if attrs.age_days < self.min_age_years * DAYS_PER_YEAR
            || attrs.age_days > self.max_age_years * DAYS_PER_YEAR
        {
            return false;
        }
        if !self.gender.matches(attrs.gender) {
            return false;
        }
        rng.smart_draw(self.coverage)
    }
}
