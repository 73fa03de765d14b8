//! `camp-core` — foundational types for the `camp` intervention-distribution
//! framework.
//!
//! This crate is a dependency of every other `camp-*` crate.  It intentionally
//! has no `camp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`ids`]          | `UnitId`, `CandidateId`, `CoordinatorId`, `CandidateRef` |
//! | [`time`]         | `SimClock` (float days, tick advancement)            |
//! | [`rng`]          | `UnitRng` (per-unit), M-of-N sampling, smart draws   |
//! | [`demographics`] | `Gender`, `TargetGender`, age constants              |
//! | [`error`]        | `CampError`, `CampResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod demographics;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use demographics::{Gender, TargetGender, DAYS_PER_YEAR, MAX_AGE_YEARS};
pub use error::{CampError, CampResult};
pub use ids::{CandidateId, CandidateRef, CoordinatorId, UnitId};
pub use rng::UnitRng;
pub use time::SimClock;
