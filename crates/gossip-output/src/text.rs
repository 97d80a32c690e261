//! `TextObserver<W>` — writes [`render_tick`] output for every tick.

use std::io::Write;

use gossip_sim::{Outcome, SimObserver, TickView};

use crate::{OutputError, render_tick};

/// A [`SimObserver`] that dumps the full state of every tick to `W`.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `evaluate` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TextObserver<W: Write> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: Write> TextObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl<W: Write> SimObserver for TextObserver<W> {
    fn on_tick(&mut self, view: &TickView<'_>) {
        let result = self.writer.write_all(render_tick(view).as_bytes());
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _outcome: Outcome) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
