//! The terminal result of an evaluation.

use std::fmt;

use gossip_core::Tick;

/// How an evaluation ended.
///
/// `Never` is not an error: it is the defined result for route sets that do
/// not converge within the horizon.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every driver knew every item at the end of the exchange step of `tick`.
    Converged { tick: Tick },
    /// The horizon was exhausted first.
    Never,
}

impl Outcome {
    /// 1-based stop number of convergence (`tick + 1`), if any.
    pub fn stop_number(self) -> Option<u64> {
        match self {
            Outcome::Converged { tick } => Some(tick.0 + 1),
            Outcome::Never => None,
        }
    }

    pub fn is_converged(self) -> bool {
        matches!(self, Outcome::Converged { .. })
    }
}

impl fmt::Display for Outcome {
    /// The stop number, or the literal `never`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stop_number() {
            Some(n) => write!(f, "{n}"),
            None    => f.write_str("never"),
        }
    }
}
