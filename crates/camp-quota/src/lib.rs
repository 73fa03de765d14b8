//! `camp-quota` — per-window, per-bin quota planning and candidate selection.
//!
//! A quota campaign targets exact counts: "N payloads to 15–30-year-old
//! females between day 10 and day 40".  The machinery splits into three
//! layers, innermost first:
//!
//! | Layer                       | Responsibility                            |
//! |-----------------------------|-------------------------------------------|
//! | [`QuotaBin`]                | one (age range × gender) stratum: per-step quota schedule, qualifying-candidate collection, reservoir selection |
//! | [`QuotaWindow`]             | one `[start, end)` time window: its bins, lazy activation, per-tick targeting refresh |
//! | [`WindowList`]              | the campaign's ordered, non-overlapping windows and the "which window is live" cursor |
//!
//! The per-step schedule is fixed at window activation so the sum over steps
//! equals the configured total exactly — no fractional drift, no lost
//! remainders.

pub mod bin;
pub mod window;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bin::QuotaBin;
pub use window::{QuotaTable, QuotaWindow, TimeUnit, WindowList};
