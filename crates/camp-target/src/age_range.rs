//! Age ranges and the validated, non-overlapping range list.

use camp_core::{CampError, CampResult, MAX_AGE_YEARS};

// ── AgeRange ──────────────────────────────────────────────────────────────────

/// A half-open age interval `[min, max)` in years.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeRange {
    min_years: f32,
    max_years: f32,
}

impl AgeRange {
    /// Construct a range; fails fast when `min >= max`.
    pub fn new(min_years: f32, max_years: f32) -> CampResult<Self> {
        if min_years >= max_years {
            return Err(CampError::InvalidRange {
                param: "age_range",
                min:   min_years,
                max:   max_years,
            });
        }
        Ok(Self { min_years, max_years })
    }

    /// `[0, MAX_AGE_YEARS)` — no age restriction.
    pub fn open() -> Self {
        Self { min_years: 0.0, max_years: MAX_AGE_YEARS }
    }

    pub fn min_years(&self) -> f32 {
        self.min_years
    }

    pub fn max_years(&self) -> f32 {
        self.max_years
    }

    /// `true` if `age_years` falls in `[min, max)`.
    #[inline]
    pub fn contains(&self, age_years: f32) -> bool {
        self.min_years <= age_years && age_years < self.max_years
    }
}

// ── AgeRangeList ──────────────────────────────────────────────────────────────

/// A set of age ranges kept sorted by minimum age.
///
/// Sorting on insert means the overlap check in [`validate`][Self::validate]
/// only has to compare neighbours.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeRangeList {
    ranges: Vec<AgeRange>,
}

impl AgeRangeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, range: AgeRange) {
        self.ranges.push(range);
        self.ranges
            .sort_unstable_by(|a, b| a.min_years.total_cmp(&b.min_years));
    }

    pub fn ranges(&self) -> &[AgeRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Fail unless the list is non-empty and no two ranges overlap.
    ///
    /// Ranges are sorted by min, so it suffices that every range starts at or
    /// after its predecessor ends.
    pub fn validate(&self, param: &'static str) -> CampResult<()> {
        if self.ranges.is_empty() {
            return Err(CampError::EmptyList { param });
        }
        for pair in self.ranges.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.max_years > next.min_years {
                return Err(CampError::OverlappingAgeRanges {
                    param,
                    prev_min: prev.min_years,
                    prev_max: prev.max_years,
                    next_min: next.min_years,
                    next_max: next.max_years,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<AgeRange> for AgeRangeList {
    fn from_iter<T: IntoIterator<Item = AgeRange>>(iter: T) -> Self {
        let mut list = Self::new();
        for range in iter {
            list.push(range);
        }
        list
    }
}
