//! Mutable per-evaluation simulation state.
//!
//! Structure-of-arrays: `positions[i]` and `knowledge[i]` belong to driver
//! `i`.  Both vectors have exactly `routes.driver_count()` entries.

use gossip_core::{DriverId, GossipSet, RouteSet, Tick};
use tracing::trace;

/// Everything that changes during an evaluation.
///
/// Invariants maintained by the step methods:
/// - `knowledge[i]` only gains bits.
/// - `positions[i] < routes.route(i).len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    /// Tick being (or last) processed.
    pub tick:      Tick,
    /// Current index into each driver's route.
    pub positions: Vec<usize>,
    /// Gossip items each driver knows.
    pub knowledge: Vec<GossipSet>,
}

impl SimulationState {
    /// Tick 0: every driver at its first stop, knowing only its own item.
    pub fn new(routes: &RouteSet) -> Self {
        Self {
            tick:      Tick::ZERO,
            positions: vec![0; routes.driver_count()],
            knowledge: routes.drivers().map(GossipSet::only).collect(),
        }
    }

    /// Exchange step.
    ///
    /// Scans ordered pairs with `i` outer and `j` inner.  Each update is
    /// written immediately, so a later pair in the same scan sees it.
    pub fn exchange(&mut self, routes: &RouteSet) {
        let n = routes.driver_count();
        for i in 0..n {
            let stop_i = routes.routes()[i].stop_at(self.positions[i]);
            for j in 0..n {
                if i == j {
                    continue;
                }
                if stop_i == routes.routes()[j].stop_at(self.positions[j]) {
                    let incoming = self.knowledge[j];
                    self.knowledge[i].absorb(incoming);
                    trace!(
                        tick = self.tick.0,
                        receiver = i,
                        sender = j,
                        stop = stop_i.0,
                        "gossip exchanged"
                    );
                }
            }
        }
    }

    /// True once every driver knows `full`.
    pub fn is_complete(&self, full: GossipSet) -> bool {
        self.knowledge.iter().all(|&g| g == full)
    }

    /// Move every driver to its next stop.
    pub fn advance(&mut self, routes: &RouteSet) {
        for (i, pos) in self.positions.iter_mut().enumerate() {
            *pos = routes.routes()[i].next_position(*pos);
        }
    }

    pub fn knowledge_of(&self, driver: DriverId) -> GossipSet {
        self.knowledge[driver.index()]
    }
}
