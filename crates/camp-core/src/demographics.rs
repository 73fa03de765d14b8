//! Demographic primitives shared by targeting and quota planning.

use std::fmt;

/// Days per simulated year.  Candidate ages are stored in days; all
/// user-facing age parameters are in years.
pub const DAYS_PER_YEAR: f32 = 365.0;

/// Upper bound used for open-ended age parameters.
pub const MAX_AGE_YEARS: f32 = 125.0;

// ── Gender ────────────────────────────────────────────────────────────────────

/// A candidate's gender.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male   => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

// ── TargetGender ──────────────────────────────────────────────────────────────

/// Gender restriction used by demographic targeting and quota bins.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetGender {
    /// No restriction.
    #[default]
    All,
    Male,
    Female,
}

impl TargetGender {
    /// `true` if `gender` satisfies this restriction.
    #[inline]
    pub fn matches(self, gender: Gender) -> bool {
        match self {
            TargetGender::All    => true,
            TargetGender::Male   => gender == Gender::Male,
            TargetGender::Female => gender == Gender::Female,
        }
    }
}

impl fmt::Display for TargetGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetGender::All    => write!(f, "All"),
            TargetGender::Male   => write!(f, "Male"),
            TargetGender::Female => write!(f, "Female"),
        }
    }
}
