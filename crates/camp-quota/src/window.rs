//! `QuotaWindow` and `WindowList` — the campaign's time-windowed quota plan.

use camp_core::{CampError, CampResult, CandidateRef, TargetGender, UnitRng, DAYS_PER_YEAR};
use camp_target::{AgeRangeList, PropertyRestrictions, Qualification, TargetingPredicate};
use camp_units::UnitContext;

use crate::QuotaBin;

// ── TimeUnit ──────────────────────────────────────────────────────────────────

/// Unit of a window's start/end values.  Year-based windows come from
/// calendar-driven campaign families; everything is normalized to days
/// internally.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TimeUnit {
    #[default]
    Days,
    Years,
}

impl TimeUnit {
    #[inline]
    fn to_days(self, value: f32) -> f32 {
        match self {
            TimeUnit::Days  => value,
            TimeUnit::Years => value * DAYS_PER_YEAR,
        }
    }
}

// ── QuotaTable ────────────────────────────────────────────────────────────────

/// Per-age-range target counts: one undifferentiated total per range, or a
/// male/female pair per range.  Exactly one form per window.
#[derive(Clone, Debug)]
pub enum QuotaTable {
    Total(Vec<u32>),
    ByGender { male: Vec<u32>, female: Vec<u32> },
}

impl QuotaTable {
    fn validate(&self, ranges_len: usize) -> CampResult<()> {
        match self {
            QuotaTable::Total(totals) => {
                if totals.len() != ranges_len {
                    return Err(CampError::QuotaLengthMismatch {
                        quota_param: "num_targeted",
                        quota_len:   totals.len(),
                        ranges_len,
                    });
                }
                if totals.iter().sum::<u32>() == 0 {
                    return Err(CampError::ZeroQuota { param: "num_targeted" });
                }
            }
            QuotaTable::ByGender { male, female } => {
                if male.len() != ranges_len || female.len() != ranges_len {
                    return Err(CampError::QuotaLengthMismatch {
                        quota_param: "num_targeted_males/num_targeted_females",
                        quota_len:   male.len().max(female.len()),
                        ranges_len,
                    });
                }
                if male.iter().sum::<u32>() + female.iter().sum::<u32>() == 0 {
                    return Err(CampError::ZeroQuota {
                        param: "num_targeted_males/num_targeted_females",
                    });
                }
            }
        }
        Ok(())
    }
}

// ── QuotaWindow ───────────────────────────────────────────────────────────────

/// One `[start, end)` period of a quota campaign with its strata.
///
/// Bins are created lazily on the first in-window targeting refresh, because
/// the per-step schedule depends on the step count `(end - start) / dt` and
/// on where inside the window the campaign joins (`initial_step`), neither of
/// which is known before ticking starts.
pub struct QuotaWindow {
    start_days: f32,
    end_days:   f32,
    age_ranges: AgeRangeList,
    table:      QuotaTable,
    predicate:  TargetingPredicate,
    qualification: Qualification,
    bins: Vec<QuotaBin>,
}

impl QuotaWindow {
    /// Validated constructor: start < end, table lengths match the range
    /// list, at least one non-zero quota, ranges non-overlapping.
    pub fn new(
        start:         f32,
        end:           f32,
        unit:          TimeUnit,
        age_ranges:    AgeRangeList,
        table:         QuotaTable,
        node_properties: PropertyRestrictions,
        property_restrictions: PropertyRestrictions,
        qualification: Qualification,
    ) -> CampResult<Self> {
        if start >= end {
            return Err(CampError::InvalidRange { param: "window", min: start, max: end });
        }
        age_ranges.validate("age_ranges")?;
        table.validate(age_ranges.len())?;

        // Age and gender stratification lives in the bins, so the predicate's
        // demographic stage stays default — the window only contributes the
        // property restrictions.
        let predicate = TargetingPredicate {
            node_properties,
            candidate_properties: property_restrictions,
            ..TargetingPredicate::default()
        };

        Ok(Self {
            start_days: unit.to_days(start),
            end_days:   unit.to_days(end),
            age_ranges,
            table,
            predicate,
            qualification,
            bins: Vec::new(),
        })
    }

    pub fn start_days(&self) -> f32 {
        self.start_days
    }

    pub fn end_days(&self) -> f32 {
        self.end_days
    }

    pub fn is_past_start(&self, now: f32) -> bool {
        self.start_days <= now
    }

    pub fn is_past_end(&self, now: f32) -> bool {
        self.end_days <= now
    }

    /// Overlap check against the chronologically previous window.
    pub fn check_overlap(&self, prev: &QuotaWindow) -> CampResult<()> {
        if prev.end_days > self.start_days {
            return Err(CampError::OverlappingWindows {
                prev_start: prev.start_days,
                prev_end:   prev.end_days,
                next_start: self.start_days,
                next_end:   self.end_days,
            });
        }
        Ok(())
    }

    /// `true` once every bin has run its schedule.  A window that has not
    /// activated yet (no bins) is not finished.
    pub fn is_finished(&self) -> bool {
        !self.bins.is_empty() && self.bins.iter().all(QuotaBin::is_finished)
    }

    // ── Per-tick targeting ────────────────────────────────────────────────

    /// Called once per tick (Update phase) while `now` is inside the window:
    /// builds the bins on first call, advances every bin's step afterwards.
    pub fn update_targeting(&mut self, now: f32, dt: f32) {
        if self.bins.is_empty() {
            self.create_bins(now, dt);
        } else {
            for bin in &mut self.bins {
                bin.advance();
            }
        }
    }

    fn create_bins(&mut self, now: f32, dt: f32) {
        let num_steps = ((self.end_days - self.start_days) / dt) as usize;
        let num_steps = num_steps.max(1);
        let initial_step = (((now - self.start_days) / dt) as usize).min(num_steps - 1);

        for (i, range) in self.age_ranges.ranges().iter().enumerate() {
            match &self.table {
                QuotaTable::Total(totals) => {
                    if totals[i] > 0 {
                        self.bins.push(QuotaBin::new(
                            *range,
                            TargetGender::All,
                            totals[i],
                            num_steps,
                            initial_step,
                        ));
                    }
                }
                QuotaTable::ByGender { male, female } => {
                    if male[i] > 0 {
                        self.bins.push(QuotaBin::new(
                            *range,
                            TargetGender::Male,
                            male[i],
                            num_steps,
                            initial_step,
                        ));
                    }
                    if female[i] > 0 {
                        self.bins.push(QuotaBin::new(
                            *range,
                            TargetGender::Female,
                            female[i],
                            num_steps,
                            initial_step,
                        ));
                    }
                }
            }
        }
    }

    /// Rebuild every bin's qualifying list from the attached units.  Coverage
    /// draws use each unit's own RNG stream.
    pub fn refresh_qualifying(&mut self, units: &mut [&mut UnitContext]) {
        for bin in &mut self.bins {
            bin.clear_qualifying();
            for unit in units.iter_mut() {
                bin.collect_qualifying(unit, &self.predicate, &self.qualification);
            }
        }
    }

    /// Select this tick's recipients from the collected qualifying lists.
    ///
    /// `rng` is the sampling stream (the coordinator's first unit).  No
    /// candidate can appear twice: bins partition the population by age and
    /// gender, and Floyd selection returns distinct indices within a bin.
    pub fn select_targets(&self, rng: &mut UnitRng) -> Vec<CandidateRef> {
        let mut selected = Vec::new();
        for bin in &self.bins {
            selected.extend(bin.select(rng));
        }
        selected
    }

    pub fn bins(&self) -> &[QuotaBin] {
        &self.bins
    }
}

// ── WindowList ────────────────────────────────────────────────────────────────

/// The campaign's windows, sorted by start, with a cursor tracking the one
/// currently (or next) active.  Windows never overlap, so at most one is
/// live at any time.
#[derive(Default)]
pub struct WindowList {
    windows: Vec<QuotaWindow>,
    cursor:  usize,
}

impl WindowList {
    /// Build from unordered windows; sorts by start and validates pairwise
    /// non-overlap.
    pub fn new(mut windows: Vec<QuotaWindow>) -> CampResult<Self> {
        if windows.is_empty() {
            return Err(CampError::EmptyList { param: "windows" });
        }
        windows.sort_by(|a, b| a.start_days.total_cmp(&b.start_days));
        for i in 1..windows.len() {
            let (prev, next) = windows.split_at(i);
            next[0].check_overlap(&prev[i - 1])?;
        }
        Ok(Self { windows, cursor: 0 })
    }

    /// Advance the cursor past ended windows, then refresh the live window's
    /// targeting.  Called every tick during the Update phase.
    pub fn update_targeting(&mut self, now: f32, dt: f32) {
        while self.cursor < self.windows.len() && self.windows[self.cursor].is_past_end(now) {
            self.cursor += 1;
        }
        if self.cursor < self.windows.len() && self.windows[self.cursor].is_past_start(now) {
            self.windows[self.cursor].update_targeting(now, dt);
        }
    }

    /// The window distribution should draw from this tick, if any.  `None`
    /// between windows or once the campaign is exhausted.
    pub fn current_mut(&mut self) -> Option<&mut QuotaWindow> {
        let w = self.windows.get_mut(self.cursor)?;
        // A window is current only once activated (bins exist).
        if w.bins().is_empty() {
            return None;
        }
        Some(w)
    }

    /// Advance past windows that have ended or exhausted their quotas and
    /// report whether the whole list is done.  Called after distribution.
    pub fn is_finished(&mut self, now: f32) -> bool {
        while self.cursor < self.windows.len()
            && (self.windows[self.cursor].is_past_end(now)
                || self.windows[self.cursor].is_finished())
        {
            self.cursor += 1;
        }
        self.cursor >= self.windows.len()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
