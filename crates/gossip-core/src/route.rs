//! Driver routes and the validated route set.
//!
//! A [`Route`] is a cyclic list of stops: after the last stop the driver
//! returns to the first.  Route lengths differ per driver, so each driver's
//! position wraps on its own modulus.
//!
//! A [`RouteSet`] is the immutable simulation input.  Building one is the
//! only place input validation happens.

use crate::{CoreResult, DriverId, InvalidInput, MAX_DRIVERS, StopId};

// ── Route ─────────────────────────────────────────────────────────────────────

/// One driver's cyclic list of stops.  Never empty once inside a `RouteSet`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    stops: Vec<StopId>,
}

impl Route {
    pub fn new(stops: Vec<StopId>) -> Self {
        Self { stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// The stop at `position`.
    ///
    /// # Panics
    /// Panics if `position >= self.len()`.
    #[inline]
    pub fn stop_at(&self, position: usize) -> StopId {
        self.stops[position]
    }

    /// Position after `position`, wrapping to 0 after the last stop.
    #[inline]
    pub fn next_position(&self, position: usize) -> usize {
        (position + 1) % self.stops.len()
    }
}

impl From<Vec<i64>> for Route {
    fn from(stops: Vec<i64>) -> Self {
        Route::new(stops.into_iter().map(StopId).collect())
    }
}

// ── RouteSet ──────────────────────────────────────────────────────────────────

/// The validated input to a simulation: one non-empty route per driver,
/// `1..=32` drivers.  Index `i` is driver `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Validate and wrap `routes`.
    pub fn new(routes: Vec<Route>) -> CoreResult<Self> {
        if routes.is_empty() {
            return Err(InvalidInput::NoDrivers.into());
        }
        if routes.len() > MAX_DRIVERS {
            return Err(InvalidInput::TooManyDrivers {
                got: routes.len(),
                max: MAX_DRIVERS,
            }
            .into());
        }
        if let Some(i) = routes.iter().position(Route::is_empty) {
            return Err(InvalidInput::EmptyRoute { driver: DriverId(i as u32) }.into());
        }
        Ok(Self { routes })
    }

    /// Build from raw integer stop lists, as produced by the route loaders.
    pub fn from_stops(routes: Vec<Vec<i64>>) -> CoreResult<Self> {
        Self::new(routes.into_iter().map(Route::from).collect())
    }

    /// Like [`from_stops`][Self::from_stops], but `None` (no route set at
    /// all) is rejected with [`InvalidInput::MissingRoutes`].
    pub fn from_optional(routes: Option<Vec<Vec<i64>>>) -> CoreResult<Self> {
        match routes {
            None    => Err(InvalidInput::MissingRoutes.into()),
            Some(r) => Self::from_stops(r),
        }
    }

    /// Number of drivers, always in `1..=MAX_DRIVERS`.
    pub fn driver_count(&self) -> usize {
        self.routes.len()
    }

    pub fn route(&self, driver: DriverId) -> &Route {
        &self.routes[driver.index()]
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn drivers(&self) -> impl Iterator<Item = DriverId> + '_ {
        (0..self.routes.len() as u32).map(DriverId)
    }
}
