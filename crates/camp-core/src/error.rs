//! Framework error type.
//!
//! Every failure in this core is a configuration failure surfaced before the
//! simulation starts — there are no transient or retryable errors.  Variants
//! carry the offending parameter names and values so the message alone is
//! enough to fix the input.

use thiserror::Error;

/// The top-level error type for all `camp-*` crates.
#[derive(Debug, Error)]
pub enum CampError {
    #[error("'{param}' min ({min}) must be < max ({max})")]
    InvalidRange { param: &'static str, min: f32, max: f32 },

    #[error(
        "'{param}' cannot have age ranges that overlap: \
         ({prev_min}, {prev_max}) vs ({next_min}, {next_max})"
    )]
    OverlappingAgeRanges {
        param:    &'static str,
        prev_min: f32,
        prev_max: f32,
        next_min: f32,
        next_max: f32,
    },

    #[error(
        "campaign windows cannot have time periods that overlap: \
         ({prev_start}, {prev_end}) vs ({next_start}, {next_end})"
    )]
    OverlappingWindows {
        prev_start: f32,
        prev_end:   f32,
        next_start: f32,
        next_end:   f32,
    },

    #[error("'{param}' cannot have zero elements")]
    EmptyList { param: &'static str },

    #[error(
        "'{quota_param}' has {quota_len} elements but 'age_ranges' has {ranges_len}; \
         there must be one quota per age range"
    )]
    QuotaLengthMismatch {
        quota_param: &'static str,
        quota_len:   usize,
        ranges_len:  usize,
    },

    #[error("'{param}' sums to zero and would target no one")]
    ZeroQuota { param: &'static str },

    #[error("'{value}' is not a known event trigger")]
    UnknownTrigger { value: String },

    #[error("'{value}' is not a known disease state")]
    UnknownDiseaseState { value: String },

    #[error(
        "demographic restrictions such as coverage and target gender do not apply \
         when distributing the node-level payload '{payload}'"
    )]
    RestrictionsOnNodePayload { payload: String },

    #[error("coverage must be within [0, 1], got {value}")]
    InvalidCoverage { value: f32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `camp-*` crates.
pub type CampResult<T> = Result<T, CampError>;
