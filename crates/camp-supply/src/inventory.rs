//! `Inventory` — the replenished stock backing a queue-family campaign.
//!
//! The stock is a simple shipment state machine: a countdown in days that,
//! on reaching zero, adds one shipment (clamped to capacity) and resets to
//! the inter-shipment interval.  Initial stock is sampled once, on the first
//! node attachment, from a configured distribution.

use camp_core::{CampError, CampResult, UnitRng};

// ── AmountDistribution ────────────────────────────────────────────────────────

/// Distribution the opening stock level is drawn from.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmountDistribution {
    Constant(f32),
    Uniform { min: f32, max: f32 },
}

impl AmountDistribution {
    pub fn validate(&self, param: &'static str) -> CampResult<()> {
        match *self {
            AmountDistribution::Constant(value) => {
                if value < 0.0 {
                    return Err(CampError::InvalidRange { param, min: 0.0, max: value });
                }
            }
            AmountDistribution::Uniform { min, max } => {
                if min < 0.0 || min > max {
                    return Err(CampError::InvalidRange { param, min, max });
                }
            }
        }
        Ok(())
    }

    pub fn sample(&self, rng: &mut UnitRng) -> f32 {
        match *self {
            AmountDistribution::Constant(value) => value,
            AmountDistribution::Uniform { min, max } => min + rng.uniform() * (max - min),
        }
    }
}

// ── Inventory ─────────────────────────────────────────────────────────────────

/// Current stock plus the shipment schedule that replenishes it.
///
/// `current` holds [`Inventory::UNINITIALIZED`] until the first node is
/// attached; the opening level cannot be sampled earlier because the draw
/// comes from that node's RNG stream.
pub struct Inventory {
    current:                u32,
    initial_amount:         AmountDistribution,
    max_stock:              u32,
    amount_in_shipment:     u32,
    days_between_shipments: f32,
    days_to_next_shipment:  f32,
}

impl Inventory {
    /// Sentinel for "opening stock not sampled yet".
    pub const UNINITIALIZED: u32 = u32::MAX;

    pub fn new(
        initial_amount:         AmountDistribution,
        max_stock:              u32,
        amount_in_shipment:     u32,
        days_between_shipments: f32,
    ) -> Self {
        Self {
            current: Self::UNINITIALIZED,
            initial_amount,
            max_stock,
            amount_in_shipment,
            days_between_shipments,
            days_to_next_shipment: days_between_shipments,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.current != Self::UNINITIALIZED
    }

    /// Sample the opening stock and derive the first shipment countdown.
    ///
    /// The countdown starts at whichever is sooner: the regular interval, or
    /// the whole number of days the opening stock lasts at the maximum
    /// distribution rate.  A first shipment never arrives while the opening
    /// stock could not yet have been exhausted.
    pub fn initialize(&mut self, rng: &mut UnitRng, max_per_day: u32) {
        let sampled = (self.initial_amount.sample(rng) + 0.5) as u32;
        self.current = sampled.min(self.max_stock);

        let days_covered = (self.current / max_per_day.max(1)) as f32;
        self.days_to_next_shipment = self.days_between_shipments.min(days_covered);
    }

    /// Advance the shipment countdown by one tick.
    pub fn update(&mut self, dt: f32) {
        if self.days_to_next_shipment <= 0.0 {
            self.current = self.current.saturating_add(self.amount_in_shipment).min(self.max_stock);
            self.days_to_next_shipment = self.days_between_shipments;
        } else {
            self.days_to_next_shipment -= dt;
        }
    }

    /// Consume `n` pieces of stock.
    pub fn debit(&mut self, n: u32) {
        debug_assert!(n <= self.current, "distribution exceeded available stock");
        self.current = self.current.saturating_sub(n);
    }

    pub fn current_stock(&self) -> u32 {
        self.current
    }

    pub fn days_to_next_shipment(&self) -> f32 {
        self.days_to_next_shipment
    }
}
