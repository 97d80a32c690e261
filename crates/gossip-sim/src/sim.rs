//! The `Sim` struct and its tick loop.

use gossip_core::{GossipSet, RouteSet, SimConfig, Tick};
use tracing::debug;

use crate::{Outcome, SimObserver, SimulationState, TickView};

/// The simulation engine.
///
/// Owns the route set and all mutable state.  An evaluation runs at most
/// once; later calls to [`evaluate`][Self::evaluate] return the cached
/// [`Outcome`] without touching state.
///
/// Not meant to be shared between threads mid-evaluation.  Independent
/// `Sim` instances share nothing.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or [`Sim::new`].
pub struct Sim {
    pub config: SimConfig,
    routes:     RouteSet,
    state:      SimulationState,
    full:       GossipSet,
    outcome:    Option<Outcome>,
}

impl Sim {
    /// Allocate fresh tick-0 state for `routes`.
    pub fn new(routes: RouteSet, config: SimConfig) -> Self {
        Self {
            state:   SimulationState::new(&routes),
            full:    GossipSet::full(routes.driver_count()),
            routes,
            config,
            outcome: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run ticks `0..=config.horizon` until every driver knows every item.
    ///
    /// Calls `observer.on_tick` once per executed tick and
    /// `observer.on_sim_end` once at the end.  If an outcome already exists
    /// it is returned immediately and the observer is not called.
    pub fn evaluate<O: SimObserver>(&mut self, mut observer: O) -> Outcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let mut outcome = Outcome::Never;
        for t in 0..=self.config.horizon.0 {
            self.state.tick = Tick(t);

            // Exchange before the completion test, completion before moving.
            self.state.exchange(&self.routes);
            let complete = self.state.is_complete(self.full);

            observer.on_tick(&self.view());

            if complete {
                outcome = Outcome::Converged { tick: self.state.tick };
                break;
            }
            self.state.advance(&self.routes);
        }

        match outcome {
            Outcome::Converged { tick } => debug!(
                drivers = self.routes.driver_count(),
                tick = tick.0,
                result = %outcome,
                "gossip converged"
            ),
            Outcome::Never => debug!(
                drivers = self.routes.driver_count(),
                horizon = self.config.horizon.0,
                "horizon exhausted without convergence"
            ),
        }

        self.outcome = Some(outcome);
        observer.on_sim_end(outcome);
        outcome
    }

    /// [`evaluate`][Self::evaluate] with no observer.
    pub fn evaluate_quiet(&mut self) -> Outcome {
        self.evaluate(crate::NoopObserver)
    }

    /// The cached outcome, or `None` before the first evaluation.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    /// Read-only access to the current (or final) state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    fn view(&self) -> TickView<'_> {
        TickView {
            tick:      self.state.tick,
            knowledge: &self.state.knowledge,
            routes:    &self.routes,
            positions: &self.state.positions,
        }
    }
}
