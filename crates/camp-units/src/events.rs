//! Event triggers and the per-unit broadcaster coordinators subscribe to.
//!
//! Coordinators learn about candidates through events: a unit raises a
//! trigger for a candidate, the broadcaster fans it out to every subscribed
//! coordinator, and queue-family coordinators enqueue or purge accordingly.
//! Subscriptions are explicit tokens so teardown happens exactly once, at the
//! coordinator's Finished transition.

use std::str::FromStr;

use camp_core::{CampError, CoordinatorId, UnitId};
use rustc_hash::FxHashMap;

// ── EventTrigger ──────────────────────────────────────────────────────────────

/// A named population event a coordinator can subscribe to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventTrigger {
    Births,
    NewInfection,
    Symptomatic,
    Recovered,
    DiseaseDeath,
    NonDiseaseDeath,
    Emigrating,
}

impl EventTrigger {
    /// Triggers that remove a candidate from every queue: the candidate has
    /// left the population one way or another.
    pub const REMOVAL_TRIGGERS: [EventTrigger; 3] = [
        EventTrigger::DiseaseDeath,
        EventTrigger::NonDiseaseDeath,
        EventTrigger::Emigrating,
    ];

    pub fn is_removal(self) -> bool {
        Self::REMOVAL_TRIGGERS.contains(&self)
    }
}

impl FromStr for EventTrigger {
    type Err = CampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Births"          => Ok(EventTrigger::Births),
            "NewInfection"    => Ok(EventTrigger::NewInfection),
            "Symptomatic"     => Ok(EventTrigger::Symptomatic),
            "Recovered"       => Ok(EventTrigger::Recovered),
            "DiseaseDeath"    => Ok(EventTrigger::DiseaseDeath),
            "NonDiseaseDeath" => Ok(EventTrigger::NonDiseaseDeath),
            "Emigrating"      => Ok(EventTrigger::Emigrating),
            _ => Err(CampError::UnknownTrigger { value: s.to_string() }),
        }
    }
}

// ── Subscription ──────────────────────────────────────────────────────────────

/// Proof of one (unit, trigger) registration, returned by
/// [`EventBroadcaster::register`] and consumed by
/// [`EventBroadcaster::unregister`].
///
/// The coordinator holds its subscriptions for the lifetime of the campaign
/// and releases each exactly once at teardown.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Subscription {
    pub unit:    UnitId,
    pub trigger: EventTrigger,
}

// ── EventBroadcaster ──────────────────────────────────────────────────────────

/// Per-unit fan-out table: trigger → subscribed coordinators.
///
/// The broadcaster only records who wants what; actual delivery is driven by
/// the campaign set, which owns the coordinators and can route to them.
#[derive(Default)]
pub struct EventBroadcaster {
    subscribers: FxHashMap<EventTrigger, Vec<CoordinatorId>>,
}

impl EventBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `coordinator` to `trigger` on the unit `unit`.
    pub fn register(
        &mut self,
        unit:        UnitId,
        trigger:     EventTrigger,
        coordinator: CoordinatorId,
    ) -> Subscription {
        let subs = self.subscribers.entry(trigger).or_default();
        if !subs.contains(&coordinator) {
            subs.push(coordinator);
        }
        Subscription { unit, trigger }
    }

    /// Release a subscription.  Consumes the token.
    pub fn unregister(&mut self, subscription: Subscription, coordinator: CoordinatorId) {
        if let Some(subs) = self.subscribers.get_mut(&subscription.trigger) {
            subs.retain(|&c| c != coordinator);
        }
    }

    /// Coordinators subscribed to `trigger`, in registration order.
    pub fn subscribers(&self, trigger: EventTrigger) -> &[CoordinatorId] {
        self.subscribers
            .get(&trigger)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
