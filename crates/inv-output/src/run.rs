//! Running a simulation to its end and writing what survives.
//!
//! A run that stops early (no alien can move) still leaves a valid map
//! behind, so the map is written before the run's own error is handed back.

use std::io::Write;
use std::path::Path;

use inv_sim::{RunSummary, SimObserver, SimResult, Simulation};

use crate::{OutputResult, write_map, write_map_file};

/// Run `sim` to termination, then write its surviving map to `sink`.
///
/// The outer result reports a failed write; the inner one is the run's own
/// outcome, returned untouched once the map is safely written.
pub fn run_and_write<O: SimObserver, W: Write>(
    sim:      &mut Simulation,
    observer: &mut O,
    sink:     W,
) -> OutputResult<SimResult<RunSummary>> {
    let result = sim.run(observer);
    write_map(sim.world(), sink)?;
    Ok(result)
}

/// [`run_and_write`] into the file at `path`, created or truncated once the
/// run is over.
pub fn run_and_write_file<O: SimObserver>(
    sim:      &mut Simulation,
    observer: &mut O,
    path:     &Path,
) -> OutputResult<SimResult<RunSummary>> {
    let result = sim.run(observer);
    write_map_file(sim.world(), path)?;
    Ok(result)
}
