//! `gossip-routes` — where route sets come from.
//!
//! Every source produces plain `Vec<Vec<i64>>` stop lists.  Validation into a
//! `gossip_core::RouteSet` is left to the caller so that all input errors
//! surface the same way.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`loader`]    | `load_routes_path`, `load_routes_reader`, `parse_route_line` |
//! | [`canned`]    | `CannedRoute` table of built-in route sets                |
//! | [`console`]   | `read_routes_interactive` line-by-line entry              |
//! | [`error`]     | `RouteLoadError`, `RouteLoadResult<T>`                    |

pub mod canned;
pub mod console;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use canned::CannedRoute;
pub use console::read_routes_interactive;
pub use error::{RouteLoadError, RouteLoadResult};
pub use loader::{load_routes_path, load_routes_reader, parse_route_line};
