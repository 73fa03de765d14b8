//! `camp-supply` — the resource side of a queue-family campaign.
//!
//! Two independent pieces, both owned by a coordinator:
//!
//! | Type                  | Responsibility                                   |
//! |-----------------------|--------------------------------------------------|
//! | [`AdmissionQueue`]    | FIFO of waiting candidates with per-tick duplicate suppression and waiting-period eviction |
//! | [`Inventory`]         | stock with periodic shipments, sampled opening level, capacity clamp |
//!
//! Neither piece knows about targeting or payloads; the coordinator wires
//! queue pops to predicate checks and debits the inventory for every payload
//! actually accepted.

pub mod inventory;
pub mod queue;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use inventory::{AmountDistribution, Inventory};
pub use queue::{AdmissionQueue, QueueEntry};
