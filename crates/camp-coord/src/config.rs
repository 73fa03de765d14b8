//! Campaign configuration — everything validated once, immutable after.

use camp_core::{TargetGender, MAX_AGE_YEARS};
use camp_quota::{QuotaTable, TimeUnit};
use camp_supply::AmountDistribution;
use camp_target::PropertyRestrictions;

use crate::Payload;

/// One campaign: a name, the payload it hands out, and its family.
pub struct CampaignConfig {
    pub name:    String,
    pub payload: Box<dyn Payload>,
    pub family:  FamilyConfig,
}

/// The two campaign families.  Quota campaigns target exact counts inside
/// scheduled time windows; queue campaigns distribute replenished stock to
/// event-triggered candidates, first come first served.
pub enum FamilyConfig {
    Quota(QuotaConfig),
    Queue(QueueConfig),
}

// ── Quota family ──────────────────────────────────────────────────────────────

pub struct QuotaConfig {
    pub windows: Vec<WindowConfig>,
}

/// One `[start, end)` window of a quota campaign, in raw configuration form;
/// `Coordinator::configure` turns it into a validated `QuotaWindow`.
pub struct WindowConfig {
    pub start:     f32,
    pub end:       f32,
    pub time_unit: TimeUnit,
    /// `(min_years, max_years)` half-open age strata.
    pub age_ranges: Vec<(f32, f32)>,
    pub quotas:     QuotaTable,
    pub node_properties:      PropertyRestrictions,
    pub candidate_properties: PropertyRestrictions,
    /// Disease-state tokens; empty means any state qualifies.
    pub qualifying_states: Vec<String>,
}

impl WindowConfig {
    pub fn new(start: f32, end: f32, age_ranges: Vec<(f32, f32)>, quotas: QuotaTable) -> Self {
        Self {
            start,
            end,
            time_unit: TimeUnit::Days,
            age_ranges,
            quotas,
            node_properties:      PropertyRestrictions::new(),
            candidate_properties: PropertyRestrictions::new(),
            qualifying_states:    Vec::new(),
        }
    }
}

// ── Queue family ──────────────────────────────────────────────────────────────

/// Replenished-stock FIFO campaign parameters.
///
/// `Default` gives an unrestricted campaign (full coverage, all ages and
/// genders); callers override the fields they care about.
pub struct QueueConfig {
    pub duration_days:           f32,
    pub max_distributed_per_day: u32,
    pub waiting_period_days:     f32,

    // Stock parameters.
    pub initial_amount:         AmountDistribution,
    pub max_stock:              u32,
    pub amount_in_shipment:     u32,
    pub days_between_shipments: f32,

    // Demographic restrictions.
    pub coverage:       f32,
    pub target_gender:  TargetGender,
    pub min_age_years:  f32,
    pub max_age_years:  f32,
    pub residents_only: bool,

    pub node_properties:      PropertyRestrictions,
    /// Restrictions on a queued candidate's own properties.
    pub candidate_properties: PropertyRestrictions,
    pub qualifying_states:    Vec<String>,

    /// Events that enqueue a candidate.  At least one is required.
    pub trigger_events: Vec<String>,
    /// Events that terminate the campaign early.  May be empty.
    pub stop_triggers: Vec<String>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            duration_days:           1.0,
            max_distributed_per_day: 1,
            waiting_period_days:     0.0,
            initial_amount:          AmountDistribution::Constant(0.0),
            max_stock:               0,
            amount_in_shipment:      0,
            days_between_shipments:  1.0,
            coverage:                1.0,
            target_gender:           TargetGender::All,
            min_age_years:           0.0,
            max_age_years:           MAX_AGE_YEARS,
            residents_only:          false,
            node_properties:         PropertyRestrictions::new(),
            candidate_properties:    PropertyRestrictions::new(),
            qualifying_states:       Vec::new(),
            trigger_events:          Vec::new(),
            stop_triggers:           Vec::new(),
        }
    }
}
