//! Simulation observer trait for diagnostics and tracing output.

use gossip_core::{DriverId, GossipSet, RouteSet, StopId, Tick};

use crate::Outcome;

/// Read-only view of the simulation handed to [`SimObserver::on_tick`].
///
/// Borrowed from the running [`Sim`][crate::Sim], so an observer cannot
/// change engine state.
#[derive(Copy, Clone, Debug)]
pub struct TickView<'a> {
    pub tick:      Tick,
    /// Knowledge after this tick's exchange step, indexed by driver.
    pub knowledge: &'a [GossipSet],
    pub routes:    &'a RouteSet,
    /// Current index into each driver's route.
    pub positions: &'a [usize],
}

impl TickView<'_> {
    pub fn driver_count(&self) -> usize {
        self.routes.driver_count()
    }

    /// The stop `driver` currently occupies.
    pub fn current_stop(&self, driver: DriverId) -> StopId {
        self.routes.route(driver).stop_at(self.positions[driver.index()])
    }
}

/// Callbacks invoked by [`Sim::evaluate`][crate::Sim::evaluate].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — convergence progress
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_tick(&mut self, view: &TickView<'_>) {
///         let known: u32 = view.knowledge.iter().map(|g| g.count()).sum();
///         println!("{}: {known} items known", view.tick);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per executed tick, after the exchange step and before
    /// drivers advance.  Also called for the converging tick.
    fn on_tick(&mut self, _view: &TickView<'_>) {}

    /// Called once when an evaluation finishes.  Not called when a cached
    /// outcome is returned.
    fn on_sim_end(&mut self, _outcome: Outcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick(&mut self, view: &TickView<'_>) {
        (**self).on_tick(view);
    }

    fn on_sim_end(&mut self, outcome: Outcome) {
        (**self).on_sim_end(outcome);
    }
}

impl<O: SimObserver> SimObserver for Option<O> {
    fn on_tick(&mut self, view: &TickView<'_>) {
        if let Some(o) = self {
            o.on_tick(view);
        }
    }

    fn on_sim_end(&mut self, outcome: Outcome) {
        if let Some(o) = self {
            o.on_sim_end(outcome);
        }
    }
}

/// Fan out to two observers, `.0` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick(&mut self, view: &TickView<'_>) {
        self.0.on_tick(view);
        self.1.on_tick(view);
    }

    fn on_sim_end(&mut self, outcome: Outcome) {
        self.0.on_sim_end(outcome);
        self.1.on_sim_end(outcome);
    }
}
