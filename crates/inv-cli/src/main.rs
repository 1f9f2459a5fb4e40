//! invasion — run an alien invasion over a text map.
//!
//! ```text
//! invasion --map world.txt --out survivors.txt -n 10
//! RUST_LOG=debug invasion --map world.txt --out survivors.txt -n 10 --seed 42 --events fights.csv
//! ```
//!
//! The surviving map is written to `--out` even when the run stops early
//! because no alien can move; the process still exits non-zero in that case.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use inv_core::{BudgetPolicy, DEFAULT_CITY_CAPACITY, DEFAULT_MOVE_BUDGET, SimConfig};
use inv_output::{CsvEventWriter, EventLogObserver, run_and_write_file};
use inv_sim::{LogObserver, RunSummary, SimBuilder, SimObserver, SimResult};
use inv_world::{WorldMap, load_map};

/// Simulate aliens invading a map of cities.
#[derive(Parser, Debug)]
#[command(name = "invasion")]
#[command(about = "Seed aliens on a city map, let them wander and fight, and write what survives")]
struct Args {
    /// Map definition file: `City dir=Other dir=Other ...` per line
    #[arg(long)]
    map: PathBuf,

    /// Where to write the surviving map
    #[arg(long)]
    out: PathBuf,

    /// Number of aliens to seed
    #[arg(short = 'n', long = "aliens", value_parser = clap::value_parser!(u64).range(1..))]
    aliens: u64,

    /// Moves each alien makes before it stops counting towards the end of the run
    #[arg(long, default_value_t = DEFAULT_MOVE_BUDGET, value_parser = clap::value_parser!(u32).range(1..))]
    moves: u32,

    /// Aliens that must meet in a city to destroy it
    #[arg(long, default_value_t = DEFAULT_CITY_CAPACITY as u64, value_parser = clap::value_parser!(u64).range(2..))]
    capacity: u64,

    /// Random seed for a reproducible run (drawn from entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop aliens from moving once they have made `--moves` moves
    #[arg(long)]
    freeze_exhausted: bool,

    /// Also write every destroyed city to this CSV file
    #[arg(long)]
    events: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let args = Args::parse();
    let config = SimConfig {
        alien_count:   usize::try_from(args.aliens).context("alien count does not fit in memory")?,
        move_budget:   args.moves,
        city_capacity: usize::try_from(args.capacity).context("capacity is too large")?,
        seed:          args.seed.unwrap_or_else(rand::random),
        budget_policy: if args.freeze_exhausted { BudgetPolicy::Freeze } else { BudgetPolicy::KeepMoving },
    };

    let world = load_map(&args.map, config.city_capacity)
        .with_context(|| format!("failed to build map from {}", args.map.display()))?;
    tracing::info!(
        cities = world.num_cities(),
        aliens = config.alien_count,
        seed   = config.seed,
        "map loaded",
    );

    let mut events = match &args.events {
        Some(path) => Some(EventLogObserver::new(
            CsvEventWriter::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => None,
    };

    let result = match events.as_mut() {
        Some(events) => simulate(config, world, &mut (LogObserver, events), &args.out),
        None => simulate(config, world, &mut LogObserver, &args.out),
    }?;

    if let Some(events) = events.as_mut() {
        events.finish().context("failed to write event log")?;
    }

    let summary = result.context("simulation stopped early")?;
    tracing::info!(steps = summary.steps, out = %args.out.display(), "surviving map written");
    Ok(())
}

/// Filter built from `RUST_LOG`'s directives, or `info` when they are unset
/// or do not parse.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Seed, run and write the surviving map to `out`.
///
/// The outer error means the run never started or its map could not be
/// written; the inner result is the run itself, whose map is on disk either
/// way.
fn simulate<O: SimObserver>(
    config:   SimConfig,
    world:    WorldMap,
    observer: &mut O,
    out:      &Path,
) -> Result<SimResult<RunSummary>> {
    let mut sim = SimBuilder::new(config, world)
        .build(observer)
        .context("failed to start simulation")?;
    run_and_write_file(&mut sim, observer, out)
        .with_context(|| format!("failed to write map to {}", out.display()))
}
