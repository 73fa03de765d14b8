//! Observer hooks for campaign telemetry.
//!
//! Coordinators report through these callbacks instead of logging directly;
//! the embedding application decides where the numbers go.

/// Per-tick campaign telemetry.  All methods default to no-ops so observers
/// implement only what they record.
pub trait CampaignObserver {
    /// `count` payloads were accepted under campaign `name` this tick.
    fn on_distributed(&mut self, name: &str, count: usize) {
        let _ = (name, count);
    }

    /// Campaign `name` reached its terminal condition.
    fn on_finished(&mut self, name: &str) {
        let _ = name;
    }
}

/// Discards everything.
pub struct NoopObserver;

impl CampaignObserver for NoopObserver {}
