//! JSON run report.

use gossip_core::{SimConfig, Tick};
use gossip_sim::Outcome;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct RunReport {
    pub drivers:      usize,
    pub config:       SimConfig,
    pub outcome:      Outcome,
    pub converged_at: Option<Tick>,
    /// Same text the plain output prints: a stop number or `never`.
    pub result:       String,
}

impl RunReport {
    pub fn new(drivers: usize, config: SimConfig, outcome: Outcome) -> Self {
        let converged_at = match outcome {
            Outcome::Converged { tick } => Some(tick),
            Outcome::Never => None,
        };
        Self {
            drivers,
            config,
            outcome,
            converged_at,
            result: outcome.to_string(),
        }
    }
}
