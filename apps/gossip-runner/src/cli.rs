//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use gossip_core::DEFAULT_HORIZON;
use gossip_routes::CannedRoute;

/// Find the first stop at which every bus driver knows every piece of gossip.
///
/// Routes come from a file (`-f`), the built-in table (`-c`), or, with
/// neither, are typed in on the console.
#[derive(Parser, Debug)]
#[command(name = "gossip", version)]
#[command(after_help = canned_help())]
pub struct Cli {
    /// Load routes from a file: one comma-separated route per line,
    /// lines starting with '#' are comments (e.g. `4,6,7,8`)
    #[arg(short = 'f', long = "file", value_name = "FILENAME", conflicts_with = "canned")]
    pub file: Option<PathBuf>,

    /// Use a built-in route set by index
    #[arg(short = 'c', long = "canned", value_name = "TEST_INDEX")]
    pub canned: Option<usize>,

    /// Print the state of every driver at every stop to stderr
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Also write a per-driver CSV trace of every tick
    #[arg(long = "trace-csv", value_name = "PATH")]
    pub trace_csv: Option<PathBuf>,

    /// Last tick attempted before answering "never"
    #[arg(long, value_name = "TICKS", default_value_t = DEFAULT_HORIZON.0)]
    pub horizon: u64,

    /// Print a JSON report instead of the bare result
    #[arg(long)]
    pub json: bool,

    /// List the built-in route sets and exit
    #[arg(long)]
    pub list: bool,
}

/// The canned route table, one line per entry.
pub fn canned_table() -> String {
    CannedRoute::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  {i}: {}\n", c.description))
        .collect()
}

fn canned_help() -> String {
    format!(
        "Built-in route sets [0-{}]:\n{}\nWithout -f or -c, routes are entered on the console; \
         an empty line ends entry.",
        CannedRoute::ALL.len() - 1,
        canned_table()
    )
}
