//! `UnitContext` and `UnitRegistry` — ownership root for all unit state.
//!
//! # Why coordinators hold `UnitId`s, not references
//!
//! The original design cached raw unit pointers inside each coordinator.
//! Here the registry exclusively owns every unit, and coordinators receive
//! `&mut UnitRegistry` for the duration of one update call.  Holding IDs
//! keeps the borrow graph flat: many coordinators can be attached to the same
//! unit without shared mutable state, and a unit's RNG and population can be
//! split-borrowed inside one call.

use camp_core::{UnitId, UnitRng};

use crate::{EventBroadcaster, Population, PropertyMap};

// ── UnitContext ───────────────────────────────────────────────────────────────

/// One spatial unit: its candidates, properties, event table, and RNG.
pub struct UnitContext {
    pub id:          UnitId,
    pub population:  Population,
    pub properties:  PropertyMap,
    pub broadcaster: EventBroadcaster,
    pub rng:         UnitRng,
}

impl UnitContext {
    pub fn new(id: UnitId, global_seed: u64) -> Self {
        Self {
            id,
            population:  Population::new(),
            properties:  PropertyMap::new(),
            broadcaster: EventBroadcaster::new(),
            rng:         UnitRng::new(global_seed, id),
        }
    }
}

// ── UnitRegistry ──────────────────────────────────────────────────────────────

/// Owns every `UnitContext` in the simulation process, indexed by `UnitId`.
#[derive(Default)]
pub struct UnitRegistry {
    units: Vec<UnitContext>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new unit seeded from `global_seed` and return its ID.
    pub fn add_unit(&mut self, global_seed: u64) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(UnitContext::new(id, global_seed));
        id
    }

    pub fn get(&self, id: UnitId) -> &UnitContext {
        &self.units[id.index()]
    }

    pub fn get_mut(&mut self, id: UnitId) -> &mut UnitContext {
        &mut self.units[id.index()]
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut UnitContext> {
        self.units.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
