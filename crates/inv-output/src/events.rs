//! Destruction log.
//!
//! [`EventLogObserver`] plugs into the simulation as a `SimObserver` and hands
//! one [`DestructionRow`] per destroyed city to an [`EventWriter`].  The CSV
//! backend writes:
//!
//! ```csv
//! step,city,aliens
//! 0,Foo,alien1 alien2
//! 17,Bar,alien3 alien6
//! ```

use std::fs::File;
use std::path::Path;

use csv::Writer;

use inv_sim::SimObserver;
use inv_world::Destruction;

use crate::{OutputError, OutputResult};

/// One destroyed city.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestructionRow {
    /// Move after which the fight happened; 0 means right after seeding.
    pub step:   u64,
    pub city:   String,
    /// Names of the aliens that died, space-separated.
    pub aliens: String,
}

impl DestructionRow {
    pub fn new(step: u64, event: &Destruction) -> Self {
        Self {
            step,
            city:   event.name.clone(),
            aliens: event.alien_names().join(" "),
        }
    }
}

/// Trait implemented by destruction-log backends.
pub trait EventWriter {
    fn write_destruction(&mut self, row: &DestructionRow) -> OutputResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent: calling it twice is fine.
    fn finish(&mut self) -> OutputResult<()>;
}

// ── CSV backend ───────────────────────────────────────────────────────────────

/// Writes the destruction log as CSV.
pub struct CsvEventWriter {
    writer:   Writer<File>,
    finished: bool,
}

impl CsvEventWriter {
    /// Create (or truncate) the CSV file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["step", "city", "aliens"])?;
        Ok(Self { writer, finished: false })
    }
}

impl EventWriter for CsvEventWriter {
    fn write_destruction(&mut self, row: &DestructionRow) -> OutputResult<()> {
        self.writer.write_record(&[row.step.to_string(), row.city.clone(), row.aliens.clone()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

// ── Observer bridge ───────────────────────────────────────────────────────────

/// A [`SimObserver`] that logs every destroyed city to an [`EventWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, call [`finish`](Self::finish): it
/// flushes the writer and reports the first error seen, if any.  A run that
/// fails never reaches `on_sim_end`, so `finish` must be called either way.
pub struct EventLogObserver<W: EventWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: EventWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Flush the writer and return the first stored error, if any.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.last_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer (e.g. to inspect what it collected).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: EventWriter> SimObserver for EventLogObserver<W> {
    fn on_city_destroyed(&mut self, step: u64, event: &Destruction) {
        let result = self.writer.write_destruction(&DestructionRow::new(step, event));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &inv_sim::RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
