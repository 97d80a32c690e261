//! Interactive route entry.
//!
//! The user types one route per line; an empty line (or end of input) ends
//! entry.  A line that fails to parse is reported and the same route number
//! is prompted again.

use std::io::{BufRead, Write};

use crate::{RouteLoadResult, parse_route_line};

/// Read routes from `input`, writing instructions and prompts to `out`.
///
/// Only I/O failures are returned as errors; parse failures are printed as
/// `Error: ...` and entry continues.
pub fn read_routes_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut out:   W,
) -> RouteLoadResult<Vec<Vec<i64>>> {
    writeln!(out, "Enter routes as integers separated by commas.")?;
    writeln!(out, "Enter an empty line to end manual entry and execute test")?;

    let mut routes = Vec::new();
    let mut line = String::new();
    loop {
        write!(out, "Enter route #: {} => ", routes.len())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }
        match parse_route_line(&line) {
            Ok(route) => routes.push(route),
            Err(e)    => writeln!(out, "Error: {e}")?,
        }
    }
    Ok(routes)
}
