//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into `Vec`-backed stores via `id.0 as usize`, but callers
//! should prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a spatial unit ("node") in the unit registry.
    pub struct UnitId(u32);
}

typed_id! {
    /// Index of a candidate within one unit's population store.
    pub struct CandidateId(u32);
}

typed_id! {
    /// Index of a coordinator within a campaign set.
    pub struct CoordinatorId(u32);
}

// ── CandidateRef ──────────────────────────────────────────────────────────────

/// A two-part handle naming one recipient: a candidate within a unit, or the
/// unit itself.
///
/// `candidate == CandidateId::INVALID` means the recipient is the spatial
/// unit (node-level payloads).  Recipients are referenced by identity only;
/// nothing in the scheduling core owns candidate state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateRef {
    pub unit:      UnitId,
    pub candidate: CandidateId,
}

impl CandidateRef {
    /// Handle to an individual candidate.
    pub fn individual(unit: UnitId, candidate: CandidateId) -> Self {
        Self { unit, candidate }
    }

    /// Handle to the unit itself (node-level recipient).
    pub fn unit(unit: UnitId) -> Self {
        Self { unit, candidate: CandidateId::INVALID }
    }

    /// `true` if this handle names a unit rather than an individual.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.candidate == CandidateId::INVALID
    }

    /// Pack both halves into one `u64` for use in guard sets.
    #[inline]
    pub fn key(&self) -> u64 {
        ((self.unit.0 as u64) << 32) | self.candidate.0 as u64
    }
}

impl fmt::Display for CandidateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            write!(f, "unit {}", self.unit.0)
        } else {
            write!(f, "candidate {}@{}", self.candidate.0, self.unit.0)
        }
    }
}
