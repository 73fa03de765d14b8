//! `camp-coord` — campaign coordinators and the tick driver.
//!
//! This is the crate applications embed.  A campaign is configured once,
//! attached to one or more spatial units, and ticked until finished:
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`payload`]     | `Payload` trait, `ApplyTarget`, `MarkerPayload`      |
//! | [`config`]      | `CampaignConfig`, `FamilyConfig`, per-family configs |
//! | [`coordinator`] | `Coordinator` — lifecycle, update/update_nodes       |
//! | [`set`]         | `CampaignSet` — two-phase tick barrier, event routing|
//! | [`observer`]    | `CampaignObserver`, `NoopObserver`                   |
//!
//! Two campaign families share the coordinator shell.  The quota family
//! targets exact per-stratum counts inside scheduled time windows; the queue
//! family hands replenished stock to event-triggered candidates in FIFO
//! order.  Both distribute by duplicating a template payload per recipient
//! and only count applications the payload accepts.

pub mod config;
pub mod coordinator;
pub mod observer;
pub mod payload;
pub mod set;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CampaignConfig, FamilyConfig, QueueConfig, QuotaConfig, WindowConfig};
pub use coordinator::Coordinator;
pub use observer::{CampaignObserver, NoopObserver};
pub use payload::{ApplyTarget, MarkerPayload, Payload};
pub use set::CampaignSet;
