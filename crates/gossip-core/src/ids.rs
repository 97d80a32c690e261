//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash`.  The inner integer is `pub`; prefer
//! [`DriverId::index`] over `id.0 as usize` when indexing per-driver arrays.

use std::fmt;

/// Generate a typed wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> Self {
                $name(n)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a driver in a [`RouteSet`][crate::RouteSet].  Driver `i` owns
    /// gossip bit `i`.
    pub struct DriverId(u32);
}

typed_id! {
    /// A stop identifier.  Only equality is meaningful: two drivers exchange
    /// gossip when their current stops compare equal.
    pub struct StopId(i64);
}

impl DriverId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for DriverId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<DriverId, Self::Error> {
        u32::try_from(n).map(DriverId)
    }
}
