//! Tests for the runner: argument parsing and canned route results.

use clap::Parser;
use gossip_core::{RouteSet, Tick};
use gossip_routes::CannedRoute;
use gossip_sim::{Outcome, SimBuilder};

use crate::cli::{Cli, canned_table};
use crate::report::RunReport;

fn canned_result(index: usize) -> String {
    let routes = RouteSet::from_stops(CannedRoute::get(index).unwrap().to_stops()).unwrap();
    SimBuilder::new(routes).build().unwrap().evaluate_quiet().to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["gossip"]).unwrap();
        assert_eq!(cli.file, None);
        assert_eq!(cli.canned, None);
        assert!(!cli.debug);
        assert_eq!(cli.horizon, 480);
        assert!(!cli.json);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["gossip", "-d", "-c", "3"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.canned, Some(3));

        let cli = Cli::try_parse_from(["gossip", "-f", "routes.txt"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("routes.txt")));
    }

    #[test]
    fn file_and_canned_conflict() {
        assert!(Cli::try_parse_from(["gossip", "-f", "routes.txt", "-c", "0"]).is_err());
    }

    #[test]
    fn unknown_argument_rejected() {
        assert!(Cli::try_parse_from(["gossip", "-x"]).is_err());
    }

    #[test]
    fn horizon_override() {
        let cli = Cli::try_parse_from(["gossip", "--horizon", "10"]).unwrap();
        assert_eq!(cli.horizon, 10);
    }

    #[test]
    fn table_lists_every_canned_route() {
        let table = canned_table();
        assert_eq!(table.lines().count(), CannedRoute::ALL.len());
        assert!(table.contains("  3: 14 drivers"));
    }
}

#[cfg(test)]
mod canned_result_tests {
    use super::*;

    #[test]
    fn published_results() {
        assert_eq!(canned_result(0), "5");
        assert_eq!(canned_result(1), "never");
        assert_eq!(canned_result(2), "9");
        assert_eq!(canned_result(3), "16");
    }

    #[test]
    fn extra_route_sets() {
        assert_eq!(canned_result(4), "16");
        assert_eq!(canned_result(5), "1");
    }
}

#[cfg(test)]
mod report_tests {
    use gossip_core::SimConfig;

    use super::*;

    #[test]
    fn converged_report() {
        let report = RunReport::new(3, SimConfig::default(), Outcome::Converged { tick: Tick(4) });
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["drivers"], 3);
        assert_eq!(json["result"], "5");
        assert_eq!(json["converged_at"], 4);
        assert_eq!(json["config"]["horizon"], 480);
    }

    #[test]
    fn never_report() {
        let report = RunReport::new(2, SimConfig::default(), Outcome::Never);
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"], "never");
        assert!(json["converged_at"].is_null());
        assert_eq!(json["outcome"], "Never");
    }
}

#[cfg(test)]
mod demo_file_tests {
    use std::path::Path;

    use gossip_routes::load_routes_path;

    use super::*;

    #[test]
    fn seven_driver_demo_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/seven_drivers.txt");
        let routes = RouteSet::from_stops(load_routes_path(&path).unwrap()).unwrap();
        assert_eq!(routes.driver_count(), 7);
        let outcome = SimBuilder::new(routes).build().unwrap().evaluate_quiet();
        assert_eq!(outcome.to_string(), "9");
    }
}
