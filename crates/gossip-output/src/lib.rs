//! `gossip-output` — diagnostic output for the bus-gossip simulator.
//!
//! Two observers are provided, both implementing `gossip_sim::SimObserver`:
//!
//! | Observer            | Output                                              |
//! |---------------------|-----------------------------------------------------|
//! | [`TextObserver`]    | Human-readable state dump per tick ([`render_tick`]) |
//! | [`CsvTraceObserver`]| One CSV row per driver per tick                     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gossip_output::TextObserver;
//!
//! let mut obs = TextObserver::new(std::io::stderr());
//! let outcome = sim.evaluate(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod render;
pub mod text;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceObserver;
pub use error::{OutputError, OutputResult};
pub use render::render_tick;
pub use text::TextObserver;
