//! `gossip-sim` — the tick loop of the bus-gossip simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..=config.horizon:
//!   ① Exchange   — every co-located pair (i, j), i outer, j inner:
//!                  knowledge[i] |= knowledge[j], applied in place.
//!   ② Complete?  — every knowledge set equals the full mask.
//!   ③ Observe    — SimObserver::on_tick with a read-only TickView.
//!   ④ Stop       — if ② held: Outcome::Converged { tick }.
//!   ⑤ Advance    — every driver moves one stop, wrapping on its own route.
//! exhausted → Outcome::Never
//! ```
//!
//! The reported stop number is `tick + 1`: the initial arrangement is stop 1.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gossip_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::from_stops(vec![vec![3, 1, 2, 3], vec![3, 2, 3, 1]])
//!     .build()?;
//! let outcome = sim.evaluate(&mut NoopObserver);
//! println!("{outcome}");
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickView};
pub use outcome::Outcome;
pub use sim::Sim;
pub use state::SimulationState;
