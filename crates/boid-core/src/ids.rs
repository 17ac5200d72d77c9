//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into SoA `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.

use std::fmt;

/// Fixed upper bound on group indices.  Group runtime state is allocated once
/// with this many slots; slot 0 belongs to [`GroupId::NONE`].
pub const GROUP_COUNT: usize = 64;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — the inner type's `MAX`.
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

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in SoA storage.  Max ~4.3 billion agents.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a flock.  Valid simulated groups are `1..GROUP_COUNT`.
    pub struct GroupId(u16);
}

impl GroupId {
    /// The "no group" sentinel.  Agents in this group are never simulated.
    pub const NONE: GroupId = GroupId(0);

    /// `true` if the id names a group the kernel runs over.
    #[inline]
    pub fn is_simulated(self) -> bool {
        self.0 != 0 && self.index() < GROUP_COUNT
    }

    /// Position of this group on the target sphere (`index − 1`).
    ///
    /// Returns `None` for [`GroupId::NONE`] and out-of-range ids.
    #[inline]
    pub fn placement_slot(self) -> Option<usize> {
        self.is_simulated().then(|| self.index() - 1)
    }

    /// All ids that can name a simulated group, ascending.
    pub fn simulated() -> impl Iterator<Item = GroupId> {
        (1..GROUP_COUNT as u16).map(GroupId)
    }
}
