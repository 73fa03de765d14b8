//! Deterministic per-unit RNG and sampling primitives.
//!
//! # Determinism strategy
//!
//! Each spatial unit gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (unit_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive unit IDs uniformly across the seed space.
//! Units never share RNG state, so the draw sequence observed by one unit is
//! unaffected by activity elsewhere and runs replay bit-for-bit from a seed.
//!
//! # Draw-count discipline
//!
//! Replayability depends on the *number and order* of draws, not just the
//! seed.  The two places that consume randomness are therefore exact about
//! it: [`UnitRng::choose_m_of_n`] consumes exactly `m` draws, and
//! [`UnitRng::smart_draw`] consumes exactly one draw unless the probability
//! is degenerate (p <= 0 or p >= 1), in which case it consumes none.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::UnitId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── UnitRng ───────────────────────────────────────────────────────────────────

/// Per-unit deterministic RNG.
///
/// Create one per spatial unit at registry construction and store it alongside
/// the unit's population.  All coordinator randomness — coverage draws and
/// selection sampling — flows through the RNG of some unit.
pub struct UnitRng(SmallRng);

impl UnitRng {
    /// Seed deterministically from the run's global seed and a unit ID.
    pub fn new(global_seed: u64, unit: UnitId) -> Self {
        let seed = global_seed ^ (unit.0 as u64).wrapping_mul(MIXING_CONSTANT);
        UnitRng(SmallRng::seed_from_u64(seed))
    }

    /// A uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f32 {
        self.0.gen_range(0.0..1.0)
    }

    /// A uniform integer in `[0, n)`.  One draw.
    #[inline]
    pub fn uniform_to(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0, "uniform_to requires n > 0");
        self.0.gen_range(0..n)
    }

    /// `true` with probability `p`, consuming a draw only when the outcome is
    /// actually random.
    ///
    /// `p >= 1.0` returns `true` and `p <= 0.0` returns `false` without
    /// touching the stream — full-coverage campaigns must not perturb replay.
    #[inline]
    pub fn smart_draw(&mut self, p: f32) -> bool {
        if p >= 1.0 {
            true
        } else if p <= 0.0 {
            false
        } else {
            self.uniform() <= p
        }
    }

    /// Select `m` distinct indices uniformly from `[0, n)` without
    /// replacement, using Robert Floyd's algorithm.
    ///
    /// Consumes exactly `m` draws and runs in O(m) time and memory regardless
    /// of `n`: for each `j` in `n-m .. n`, draw an index in `[0, j]`; if it
    /// was already chosen, take `j` itself instead.  Every size-`m` subset is
    /// equally likely.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `m > n`.  Callers wanting "all of them" when
    /// `m >= n` handle that case before sampling (and consume no draws).
    pub fn choose_m_of_n(&mut self, m: u32, n: u32) -> BTreeSet<u32> {
        debug_assert!(m <= n, "choose_m_of_n requires m <= n (m={m}, n={n})");

        let mut selected = BTreeSet::new();
        for j in (n - m)..n {
            let index = self.uniform_to(j + 1); // +1 so that j itself is includable
            if !selected.insert(index) {
                selected.insert(j);
            }
        }
        selected
    }
}
