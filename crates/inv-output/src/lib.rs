//! `inv-output` — what a run leaves behind.
//!
//! | Module     | Output                                                      |
//! |------------|-------------------------------------------------------------|
//! | [`map`]    | The surviving map, in the same text format the loader reads |
//! | [`events`] | Optional `step,city,aliens` CSV of every destroyed city     |
//! | [`run`]    | Runs a simulation and writes its map even if the run fails  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use inv_output::{run_and_write_file, CsvEventWriter, EventLogObserver};
//!
//! let mut events = EventLogObserver::new(CsvEventWriter::create(Path::new("events.csv"))?);
//! let result = run_and_write_file(&mut sim, &mut events, Path::new("out.txt"))?;
//! events.finish()?;
//! let summary = result?;
//! ```

pub mod error;
pub mod events;
pub mod map;
pub mod run;


pub use error::{OutputError, OutputResult};
pub use events::{CsvEventWriter, DestructionRow, EventLogObserver, EventWriter};
pub use map::{city_line, write_map, write_map_file};
pub use run::{run_and_write, run_and_write_file};
