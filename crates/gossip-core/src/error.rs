//! Construction-time error types.
//!
//! Validation happens once, when a [`RouteSet`][crate::RouteSet] is built.
//! Nothing downstream of a valid `RouteSet` can fail.

use thiserror::Error;

use crate::DriverId;

/// Why a route set was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("route set is missing")]
    MissingRoutes,

    #[error("route set has no drivers")]
    NoDrivers,

    #[error("route set has {got} drivers; at most {max} are supported")]
    TooManyDrivers { got: usize, max: usize },

    #[error("route for {driver} has no stops")]
    EmptyRoute { driver: DriverId },
}

/// The top-level error type for `gossip-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Shorthand result type for `gossip-core`.
pub type CoreResult<T> = Result<T, CoreError>;
