//! Simulation time model.
//!
//! # Design
//!
//! Campaign arithmetic runs on fractional days: waiting periods, shipment
//! countdowns, and window bounds are all expressed in days and advanced by a
//! per-tick `dt`.  `SimClock` is the single source of "now"; every coordinator
//! reads the same value within a tick, and queue-entry timestamps compare
//! equal to `now` exactly when they were recorded during the current tick
//! (both sides come from the same accumulation, so `==` on `f32` is sound
//! here).

use std::fmt;

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The campaign clock — current simulation time in days.
///
/// Cheap to copy and intentionally holds no heap data.  The tick driver
/// advances it once per tick, after the `update_nodes` phase, so both update
/// phases of a tick observe the same `time`.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Current simulation time in days since campaign start.
    pub time: f32,
}

impl SimClock {
    /// A clock at day zero.
    pub fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Start the clock at an arbitrary day (mid-simulation campaign starts).
    pub fn starting_at(day: f32) -> Self {
        Self { time: day }
    }

    /// Advance the clock by one tick of `dt` days.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.time)
    }
}
