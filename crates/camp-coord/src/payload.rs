//! The `Payload` trait — what a campaign actually hands out.
//!
//! A coordinator owns one template payload and produces a fresh duplicate
//! per distribution; duplicates are applied once and discarded.  `apply`
//! returning `false` means the recipient rejected the payload, and the
//! coordinator must not count it against stock or quota.

use camp_units::{CandidateAttributes, PropertyMap};

/// Where a duplicated payload lands.
pub enum ApplyTarget<'a> {
    Candidate(&'a mut CandidateAttributes),
    Unit(&'a mut PropertyMap),
}

pub trait Payload {
    fn name(&self) -> &str;

    /// Node-level payloads go to the spatial unit itself rather than to an
    /// individual; queued candidates are mapped to their unit at enqueue.
    fn is_node_level(&self) -> bool {
        false
    }

    fn duplicate(&self) -> Box<dyn Payload>;

    /// Apply to the recipient.  `false` means rejected.
    fn apply(&self, target: ApplyTarget<'_>) -> bool;
}

// ── MarkerPayload ─────────────────────────────────────────────────────────────

/// Reference payload: tags the recipient with the campaign's name and rejects
/// re-application, so one recipient never absorbs the same campaign twice.
#[derive(Clone)]
pub struct MarkerPayload {
    name:       String,
    node_level: bool,
}

impl MarkerPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), node_level: false }
    }

    /// A marker applied to units rather than individuals.
    pub fn node_level(name: impl Into<String>) -> Self {
        Self { name: name.into(), node_level: true }
    }
}

impl Payload for MarkerPayload {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_node_level(&self) -> bool {
        self.node_level
    }

    fn duplicate(&self) -> Box<dyn Payload> {
        Box::new(self.clone())
    }

    fn apply(&self, target: ApplyTarget<'_>) -> bool {
        match target {
            ApplyTarget::Candidate(attrs) => attrs.received.insert(self.name.clone()),
            ApplyTarget::Unit(properties) => {
                if properties.get(&self.name).is_some() {
                    return false;
                }
                properties.set(self.name.clone(), "received");
                true
            }
        }
    }
}
