//! Per-driver knowledge as a fixed-width bitset.
//!
//! Bit `k` of a driver's [`GossipSet`] is set once that driver has heard
//! driver `k`'s gossip item.  The width is fixed at 32 bits, which is what
//! bounds a [`RouteSet`][crate::RouteSet] to [`MAX_DRIVERS`] drivers.
//!
//! Sets only grow: [`GossipSet::absorb`] is a bitwise OR and there is no
//! operation that clears a bit.

use std::fmt;

use crate::DriverId;

/// Largest driver count a `GossipSet` can represent.
pub const MAX_DRIVERS: usize = u32::BITS as usize;

/// The set of gossip items one driver currently knows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GossipSet(u32);

impl GossipSet {
    pub const EMPTY: GossipSet = GossipSet(0);

    /// The set holding only `driver`'s own item.
    #[inline]
    pub fn only(driver: DriverId) -> Self {
        debug_assert!(driver.index() < MAX_DRIVERS, "{driver} out of bitset range");
        GossipSet(1 << driver.0)
    }

    /// Every item of an `n`-driver route set (`2^n - 1`).
    #[inline]
    pub fn full(n: usize) -> Self {
        debug_assert!(n <= MAX_DRIVERS);
        if n >= MAX_DRIVERS {
            GossipSet(u32::MAX)
        } else {
            GossipSet((1u32 << n) - 1)
        }
    }

    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        GossipSet(bits)
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Learn everything `other` knows.
    #[inline]
    pub fn absorb(&mut self, other: GossipSet) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn contains(self, driver: DriverId) -> bool {
        driver.index() < MAX_DRIVERS && self.0 & (1 << driver.0) != 0
    }

    #[inline]
    pub fn is_superset_of(self, other: GossipSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of items known.
    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Render as an `n`-character binary string, least-significant bit first.
    ///
    /// `GossipSet::from_bits(0b011).render(3) == "110"`.
    pub fn render(self, n: usize) -> String {
        (0..n.min(MAX_DRIVERS))
            .map(|k| if (self.0 >> k) & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Display for GossipSet {
    /// Full 32-bit rendering, LSB first.  Use [`GossipSet::render`] to trim to
    /// the driver count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(MAX_DRIVERS))
    }
}
