//! Fluent builder for constructing a [`Sim`].

use gossip_core::{RouteSet, SimConfig, Tick};

use crate::{Sim, SimResult};

enum Routes {
    Validated(RouteSet),
    Raw(Option<Vec<Vec<i64>>>),
}

/// Fluent builder for [`Sim`].
///
/// # Inputs
///
/// | Method                   | Default                         |
/// |--------------------------|---------------------------------|
/// | `new` / `from_stops` / `from_optional` | required          |
/// | `.config(c)`             | `SimConfig::default()`          |
/// | `.horizon(t)`            | `DEFAULT_HORIZON` (480)         |
///
/// Raw stop lists are validated in [`build`][Self::build].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::from_stops(routes)
///     .horizon(Tick(60))
///     .build()?;
/// let outcome = sim.evaluate(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    routes: Routes,
    config: SimConfig,
}

impl SimBuilder {
    /// Start from an already validated route set.
    pub fn new(routes: RouteSet) -> Self {
        Self { routes: Routes::Validated(routes), config: SimConfig::default() }
    }

    /// Start from raw integer stop lists, one per driver.
    pub fn from_stops(routes: Vec<Vec<i64>>) -> Self {
        Self::from_optional(Some(routes))
    }

    /// Start from possibly absent input; `None` fails in `build`.
    pub fn from_optional(routes: Option<Vec<Vec<i64>>>) -> Self {
        Self { routes: Routes::Raw(routes), config: SimConfig::default() }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Last tick attempted (inclusive).
    pub fn horizon(mut self, horizon: Tick) -> Self {
        self.config.horizon = horizon;
        self
    }

    /// Validate inputs and return a [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        let routes = match self.routes {
            Routes::Validated(r) => r,
            Routes::Raw(raw)     => RouteSet::from_optional(raw)?,
        };
        Ok(Sim::new(routes, self.config))
    }
}
