//! `camp-target` — the eligibility pipeline deciding who may receive a
//! payload.
//!
//! Targeting is a short-circuit conjunction evaluated per candidate:
//!
//! ```text
//! node properties → demographics (coverage, gender, age) → disease state
//! ```
//!
//! Any stage returning `false` stops evaluation.  The coverage stage is the
//! only one that consumes randomness — a single Bernoulli draw per evaluated
//! candidate, skipped entirely at coverage 1.0 so full-coverage campaigns
//! replay identically with and without the stage.
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`age_range`]   | `AgeRange`, `AgeRangeList` (validated, non-overlapping) |
//! | [`property`]    | `PropertyRestrictions` (OR of AND-groups)            |
//! | [`demographic`] | `DemographicRestrictions` (coverage/gender/age)      |
//! | [`predicate`]   | `Qualification`, `TargetingPredicate`                |

pub mod age_range;
pub mod demographic;
pub mod predicate;
pub mod property;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use age_range::{AgeRange, AgeRangeList};
pub use demographic::DemographicRestrictions;
pub use predicate::{Qualification, TargetingPredicate};
pub use property::PropertyRestrictions;
