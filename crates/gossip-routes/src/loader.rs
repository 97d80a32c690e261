//! Route file loader.
//!
//! # File format
//!
//! One route per line, stops as comma-separated integers.  Whitespace around
//! each stop is ignored.  Lines beginning with `#` are comments and blank
//! lines are skipped.  Routes may have different lengths.
//!
//! ```text
//! # three drivers
//! 3, 1, 2, 3
//! 3, 2, 3, 1
//! 4, 2, 3, 4, 5
//! ```

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{RouteLoadError, RouteLoadResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load route stop lists from a file.
pub fn load_routes_path(path: &Path) -> RouteLoadResult<Vec<Vec<i64>>> {
    let file = std::fs::File::open(path)?;
    load_routes_reader(file)
}

/// Like [`load_routes_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn load_routes_reader<R: Read>(reader: R) -> RouteLoadResult<Vec<Vec<i64>>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(reader);

    let mut routes = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        routes.push(parse_record(&record, line)?);
    }
    Ok(routes)
}

/// Parse one comma-separated line of stops, e.g. `"4, 6,7 ,8"`.
///
/// Used by the console reader; `line` is reported in errors as 1.
pub fn parse_route_line(s: &str) -> RouteLoadResult<Vec<i64>> {
    s.split(',')
        .map(|field| parse_stop(field, 1))
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(record: &StringRecord, line: u64) -> RouteLoadResult<Vec<i64>> {
    record.iter().map(|field| parse_stop(field, line)).collect()
}

fn parse_stop(field: &str, line: u64) -> RouteLoadResult<i64> {
    let field = field.trim();
    field.parse::<i64>().map_err(|_| RouteLoadError::Parse {
        line,
        msg: format!("invalid stop {field:?}: expected an integer"),
    })
}
