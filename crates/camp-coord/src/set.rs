//! `CampaignSet` — the per-process tick driver.
//!
//! Owns the clock, the unit registry, and every coordinator, and enforces
//! the one ordering guarantee the system needs: all `update` calls complete
//! before any `update_nodes` call starts.  The barrier lives here so no
//! coordinator can observe another's distribution-phase side effects within
//! a tick.

use camp_core::{CampResult, CandidateId, CandidateRef, CoordinatorId, SimClock, UnitId};
use camp_units::{EventTrigger, UnitRegistry};

use crate::{CampaignConfig, CampaignObserver, Coordinator};

pub struct CampaignSet {
    registry:     UnitRegistry,
    coordinators: Vec<Coordinator>,
    clock:        SimClock,
}

impl CampaignSet {
    pub fn new() -> Self {
        Self {
            registry:     UnitRegistry::new(),
            coordinators: Vec::new(),
            clock:        SimClock::new(),
        }
    }

    /// A set whose clock starts mid-simulation.
    pub fn starting_at(day: f32) -> Self {
        Self { clock: SimClock::starting_at(day), ..Self::new() }
    }

    // ── Construction ──────────────────────────────────────────────────────

    pub fn add_unit(&mut self, global_seed: u64) -> UnitId {
        self.registry.add_unit(global_seed)
    }

    /// Validate a campaign and take ownership of its coordinator.
    pub fn add_coordinator(&mut self, config: CampaignConfig) -> CampResult<CoordinatorId> {
        let id = CoordinatorId(self.coordinators.len() as u32);
        self.coordinators.push(Coordinator::configure(id, config)?);
        Ok(id)
    }

    /// Attach `unit` to `coordinator` (activates it on first attachment).
    pub fn attach(&mut self, coordinator: CoordinatorId, unit: UnitId) {
        let coordinator = &mut self.coordinators[coordinator.index()];
        coordinator.add_node(self.registry.get_mut(unit));
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// Run one tick of `dt` days: phase one for every coordinator, phase two
    /// for every coordinator, then advance the clock.
    pub fn tick(&mut self, dt: f32, observer: &mut dyn CampaignObserver) {
        for coordinator in &mut self.coordinators {
            coordinator.update(&self.clock, dt);
        }
        for coordinator in &mut self.coordinators {
            coordinator.update_nodes(&self.clock, dt, &mut self.registry, observer);
        }
        self.clock.advance(dt);
    }

    /// Route a population event to every coordinator subscribed to `trigger`
    /// on `unit`.
    pub fn broadcast(&mut self, unit: UnitId, candidate: CandidateId, trigger: EventTrigger) {
        let subscribed: Vec<CoordinatorId> =
            self.registry.get(unit).broadcaster.subscribers(trigger).to_vec();
        let candidate = CandidateRef::individual(unit, candidate);
        for id in subscribed {
            self.coordinators[id.index()].notify_event(trigger, candidate, self.clock.time);
        }
    }

    pub fn all_finished(&self) -> bool {
        self.coordinators.iter().all(Coordinator::is_finished)
    }

    // ── Access ────────────────────────────────────────────────────────────

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut UnitRegistry {
        &mut self.registry
    }

    pub fn coordinator(&self, id: CoordinatorId) -> &Coordinator {
        &self.coordinators[id.index()]
    }
}

impl Default for CampaignSet {
    fn default() -> Self {
        Self::new()
    }
}
