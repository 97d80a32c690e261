//! `gossip-core` — foundational types for the bus-gossip simulator.
//!
//! Every other `gossip-*` crate depends on this one.  It has no `gossip-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DriverId`, `StopId`                                  |
//! | [`gossip`]      | `GossipSet` fixed-width knowledge bitset              |
//! | [`route`]       | `Route`, `RouteSet` (validated simulation input)      |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`error`]       | `CoreError`, `InvalidInput`, `CoreResult`             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod gossip;
pub mod ids;
pub mod route;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult, InvalidInput};
pub use gossip::{GossipSet, MAX_DRIVERS};
pub use ids::{DriverId, StopId};
pub use route::{Route, RouteSet};
pub use time::{DEFAULT_HORIZON, SimConfig, Tick};
