//! `QuotaBin` — one (age range × gender) stratum of a quota window.

use camp_core::{CandidateRef, TargetGender, UnitRng};
use camp_target::{AgeRange, Qualification, TargetingPredicate};
use camp_units::UnitContext;

/// One stratum with an independent per-step quota schedule.
///
/// Construction spreads `total` across `num_steps` time steps: every step
/// gets `total / num_steps`, and the `total % num_steps` remainder is added
/// one-each to the chronologically first steps (starting at `initial_step`,
/// wrapping), so the schedule sums to `total` exactly.
///
/// A bin with `total == 0` must not be constructed — the window layer omits
/// those entirely.
pub struct QuotaBin {
    age_range: AgeRange,
    gender:    TargetGender,
    per_step:  Vec<u32>,
    step:      usize,
    /// Whether `advance` has been called since activation.  A bin created on
    /// its own last step still owes that step's distribution, so the finished
    /// test needs more than the index alone.
    advanced:  bool,
    /// Qualifying candidates collected this tick; cleared on every refresh.
    qualifying: Vec<CandidateRef>,
}

impl QuotaBin {
    /// # Panics
    ///
    /// Panics in debug mode if `num_steps == 0`, `initial_step >= num_steps`,
    /// or `total == 0` (zero-total bins are omitted, not created).
    pub fn new(
        age_range:    AgeRange,
        gender:       TargetGender,
        total:        u32,
        num_steps:    usize,
        initial_step: usize,
    ) -> Self {
        debug_assert!(num_steps > 0, "a quota bin needs at least one step");
        debug_assert!(initial_step < num_steps, "initial_step must be < num_steps");
        debug_assert!(total > 0, "zero-total bins are omitted at window level");

        let base = total / num_steps as u32;
        let remainder = (total - base * num_steps as u32) as usize;

        let mut per_step = vec![base; num_steps];
        for i in 0..remainder {
            per_step[(initial_step + i) % num_steps] += 1;
        }

        Self {
            age_range,
            gender,
            per_step,
            step: initial_step,
            advanced: false,
            qualifying: Vec::new(),
        }
    }

    /// Quota for the current step.
    #[inline]
    pub fn current_quota(&self) -> u32 {
        self.per_step[self.step]
    }

    /// Move to the next step, clamped at the final index.
    pub fn advance(&mut self) {
        if self.step + 1 < self.per_step.len() {
            self.step += 1;
        }
        self.advanced = true;
    }

    /// `true` once the index has reached the last step and at least one
    /// advance has happened since activation.
    pub fn is_finished(&self) -> bool {
        self.advanced && self.step + 1 >= self.per_step.len()
    }

    pub fn per_step(&self) -> &[u32] {
        &self.per_step
    }

    // ── Per-tick selection ────────────────────────────────────────────────

    /// Clear the qualifying list ahead of a fresh collection pass.
    pub fn clear_qualifying(&mut self) {
        self.qualifying.clear();
    }

    /// Append every candidate in `unit` that falls in this bin and passes the
    /// targeting predicate and qualification check.
    ///
    /// The age/gender test runs before the predicate so candidates outside
    /// the stratum never consume a coverage draw.
    pub fn collect_qualifying(
        &mut self,
        unit:          &mut UnitContext,
        predicate:     &TargetingPredicate,
        qualification: &Qualification,
    ) {
        let UnitContext { id, population, properties, rng, .. } = unit;

        let mut found = Vec::new();
        population.visit(|candidate, attrs| {
            if !self.age_range.contains(attrs.age_years()) {
                return;
            }
            if !self.gender.matches(attrs.gender) {
                return;
            }
            if !predicate.evaluate(properties, attrs, rng) {
                return;
            }
            if !qualification.qualifies(attrs) {
                return;
            }
            found.push(CandidateRef::individual(*id, candidate));
        });
        self.qualifying.extend(found);
    }

    /// Select up to `current_quota()` of the qualifying candidates.
    ///
    /// When the quota covers everyone, all qualifying candidates are returned
    /// and no randomness is consumed.  Otherwise exactly `quota` distinct
    /// candidates are drawn by Floyd sampling (`quota` draws).
    pub fn select(&self, rng: &mut UnitRng) -> Vec<CandidateRef> {
        let n = self.qualifying.len() as u32;
        let m = self.current_quota();

        if m >= n {
            return self.qualifying.clone();
        }
        rng.choose_m_of_n(m, n)
            .into_iter()
            .map(|i| self.qualifying[i as usize])
            .collect()
    }
}
