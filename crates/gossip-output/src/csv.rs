//! CSV trace backend.
//!
//! One row per driver per tick:
//!
//! ```csv
//! tick,driver,position,stop,knowledge,known_count
//! 0,0,0,3,110,2
//! ```
//!
//! `knowledge` uses the same LSB-first rendering as the text dump.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use gossip_sim::{Outcome, SimObserver, TickView};

use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a per-driver trace as CSV.
///
/// Like [`TextObserver`][crate::TextObserver], write errors are kept and
/// retrieved with [`take_error`][Self::take_error].
pub struct CsvTraceObserver<W: Write> {
    writer:     Writer<W>,
    last_error: Option<OutputError>,
}

impl CsvTraceObserver<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvTraceObserver<W> {
    /// Wrap any writer and write the header row.
    pub fn from_writer(inner: W) -> OutputResult<Self> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record(["tick", "driver", "position", "stop", "knowledge", "known_count"])?;
        Ok(Self { writer, last_error: None })
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush and return the inner writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(std::io::Error::other(e.to_string())))
    }

    fn write_tick(&mut self, view: &TickView<'_>) -> OutputResult<()> {
        let n = view.driver_count();
        for driver in view.routes.drivers() {
            let i = driver.index();
            let knowledge = view.knowledge[i];
            self.writer.write_record(&[
                view.tick.0.to_string(),
                i.to_string(),
                view.positions[i].to_string(),
                view.current_stop(driver).0.to_string(),
                knowledge.render(n),
                knowledge.count().to_string(),
            ])?;
        }
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for CsvTraceObserver<W> {
    fn on_tick(&mut self, view: &TickView<'_>) {
        let result = self.write_tick(view);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _outcome: Outcome) {
        let result = self.writer.flush().map_err(OutputError::from);
        self.store_err(result);
    }
}
