//! `gossip` — command-line runner for the bus-gossip simulator.
//!
//! Run with:
//!   cargo run -p gossip-runner -- -c 2 -d
//!   cargo run -p gossip-runner -- -f routes.txt --json
//!   RUST_LOG=gossip_sim=trace cargo run -p gossip-runner -- -c 0

mod cli;
mod report;

#[cfg(test)]
mod tests;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gossip_core::{RouteSet, SimConfig, Tick};
use gossip_output::{CsvTraceObserver, TextObserver};
use gossip_routes::{CannedRoute, load_routes_path, read_routes_interactive};
use gossip_sim::{Outcome, SimBuilder};

use cli::Cli;
use report::RunReport;

// ── Route sources ─────────────────────────────────────────────────────────────

/// Resolve the route set the user asked for.
fn load_routes(cli: &Cli) -> Result<Vec<Vec<i64>>> {
    if let Some(index) = cli.canned {
        let canned = CannedRoute::get(index)?;
        info!(index, description = canned.description, "using canned route set");
        return Ok(canned.to_stops());
    }
    if let Some(path) = &cli.file {
        let routes = load_routes_path(path)
            .with_context(|| format!("loading routes from {}", path.display()))?;
        info!(path = %path.display(), routes = routes.len(), "loaded route file");
        return Ok(routes);
    }
    let stdin = io::stdin();
    let routes = read_routes_interactive(stdin.lock(), io::stdout())?;
    info!(routes = routes.len(), "read routes from console");
    Ok(routes)
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// Build and evaluate, attaching the observers `cli` asks for.
fn run(cli: &Cli, routes: RouteSet) -> Result<Outcome> {
    let config = SimConfig::with_horizon(Tick(cli.horizon));
    let mut sim = SimBuilder::new(routes).config(config).build()?;

    let mut text = cli.debug.then(|| TextObserver::new(io::stderr()));
    let mut trace = match &cli.trace_csv {
        Some(path) => Some(
            CsvTraceObserver::create(path)
                .with_context(|| format!("creating trace file {}", path.display()))?,
        ),
        None => None,
    };

    let outcome = sim.evaluate((&mut text, &mut trace));

    if let Some(e) = text.as_mut().and_then(TextObserver::take_error) {
        warn!("debug output error: {e}");
    }
    if let Some(e) = trace.as_mut().and_then(CsvTraceObserver::take_error) {
        warn!("trace output error: {e}");
    }
    Ok(outcome)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gossip_runner=info,gossip_sim=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list {
        print!("{}", cli::canned_table());
        return Ok(());
    }

    let routes = RouteSet::from_stops(load_routes(&cli)?)?;
    let drivers = routes.driver_count();
    let outcome = run(&cli, routes)?;
    info!(drivers, result = %outcome, "evaluation finished");

    if cli.json {
        let report = RunReport::new(drivers, SimConfig::with_horizon(Tick(cli.horizon)), outcome);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{outcome}");
    }
    Ok(())
}
