//! Simulation time model.
//!
//! One tick is one simulated minute.  The loop runs ticks `0..=horizon`
//! inclusive; the default horizon of `60 * 8` gives 481 iterations: an
//! eight-hour shift plus the initial arrangement at tick 0.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Last tick attempted by default: eight hours of one-minute ticks.
pub const DEFAULT_HORIZON: Tick = Tick(60 * 8);

/// Simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Last tick attempted (inclusive).  Default: [`DEFAULT_HORIZON`].
    pub horizon: Tick,
}

impl SimConfig {
    pub fn with_horizon(horizon: Tick) -> Self {
        Self { horizon }
    }

    /// Loop iterations a non-converging run performs (`horizon + 1`).
    #[inline]
    pub fn total_iterations(&self) -> u64 {
        self.horizon.0 + 1
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { horizon: DEFAULT_HORIZON }
    }
}
