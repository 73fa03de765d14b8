//! `AdmissionQueue` — FIFO of candidates awaiting a distribution attempt.
//!
//! Entries are strictly chronological, which is what lets both the expiry
//! scan and the eligibility scan stop at the first entry that fails their
//! test.  A candidate enqueued this tick becomes eligible next tick.

use std::collections::VecDeque;

use camp_core::CandidateRef;
use rustc_hash::FxHashSet;

// ── QueueEntry ────────────────────────────────────────────────────────────────

/// One admission: who, and when they joined.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueEntry {
    pub candidate:   CandidateRef,
    pub enqueued_at: f32,
}

// ── EnqueueGuard ──────────────────────────────────────────────────────────────

/// Suppresses duplicate admissions of the same candidate within one tick.
///
/// Keyed by packed candidate ref; the set clears itself whenever the tick
/// time moves, so re-admission on a later tick is allowed.  Explicit state
/// owned by the queue rather than anything global.
#[derive(Default)]
struct EnqueueGuard {
    time: f32,
    seen: FxHashSet<u64>,
}

impl EnqueueGuard {
    /// `true` if `candidate` has not been admitted yet at `now`.
    fn admit(&mut self, now: f32, candidate: CandidateRef) -> bool {
        if now != self.time {
            self.seen.clear();
            self.time = now;
        }
        self.seen.insert(candidate.key())
    }
}

// ── AdmissionQueue ────────────────────────────────────────────────────────────

pub struct AdmissionQueue {
    entries:             VecDeque<QueueEntry>,
    guard:               EnqueueGuard,
    waiting_period_days: f32,
}

impl AdmissionQueue {
    pub fn new(waiting_period_days: f32) -> Self {
        Self {
            entries: VecDeque::new(),
            guard:   EnqueueGuard::default(),
            waiting_period_days,
        }
    }

    /// Push `(candidate, now)` to the back, unless the guard has already seen
    /// this candidate at `now`.  Returns whether the entry was admitted.
    pub fn enqueue(&mut self, now: f32, candidate: CandidateRef) -> bool {
        if !self.guard.admit(now, candidate) {
            return false;
        }
        if let Some(back) = self.entries.back() {
            debug_assert!(
                back.enqueued_at <= now,
                "queue entries must stay in chronological order"
            );
        }
        self.entries.push_back(QueueEntry { candidate, enqueued_at: now });
        true
    }

    /// Evict entries whose waiting period has lapsed without a distribution
    /// attempt.  The `+ dt` allowance covers the one tick during which a
    /// fresh entry is ineligible.  Front scan only; chronological order means
    /// the first survivor ends the scan.  Returns the eviction count.
    pub fn expire(&mut self, now: f32, dt: f32) -> usize {
        let mut evicted = 0;
        while let Some(front) = self.entries.front() {
            if now - front.enqueued_at > self.waiting_period_days + dt {
                self.entries.pop_front();
                evicted += 1;
            } else {
                break;
            }
        }
        evicted
    }

    /// Pop the oldest entry eligible for a distribution attempt.
    ///
    /// `None` when the queue is empty or the front entry was enqueued this
    /// tick: entries behind it are at least as recent, so the scan halts.
    pub fn pop_eligible(&mut self, now: f32) -> Option<QueueEntry> {
        let front = self.entries.front()?;
        if front.enqueued_at >= now {
            return None;
        }
        self.entries.pop_front()
    }

    /// Purge every entry naming `candidate` (a candidate re-triggered on
    /// later ticks may appear more than once).  Returns the purge count.
    pub fn remove_candidate(&mut self, candidate: CandidateRef) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.candidate != candidate);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
