//! `camp-units` — the spatial-unit substrate that coordinators draw
//! candidates from.
//!
//! A campaign distributes to candidates living in spatial units ("nodes").
//! This crate provides the unit-side machinery the scheduling core consumes:
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`candidate`] | `DiseaseState`, `CandidateAttributes`, `PropertyMap`   |
//! | [`population`]| `Population` — per-unit candidate store                |
//! | [`events`]    | `EventTrigger`, `EventBroadcaster`, `Subscription`     |
//! | [`registry`]  | `UnitContext`, `UnitRegistry`                          |
//!
//! The disease/biology side is deliberately absent: candidates carry only the
//! attributes the targeting pipeline reads (age, gender, disease state,
//! properties).  A full simulation would layer its own models on top and keep
//! these attributes current.

pub mod candidate;
pub mod events;
pub mod population;
pub mod registry;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use candidate::{CandidateAttributes, DiseaseState, PropertyMap};
pub use events::{EventBroadcaster, EventTrigger, Subscription};
pub use population::Population;
pub use registry::{UnitContext, UnitRegistry};
