//! `inv-sim` — drives an invasion from seeding to the last move.
//!
//! # Step loop
//!
//! ```text
//! build:  seed config.alien_count aliens → resolve collisions → track survivors
//! step:   ① stop if no aliens remain or no alien is still tracked
//!         ② move one alien along one road           (NoMovePossible → error)
//!         ③ count the move; untrack at move_budget
//!         ④ resolve collisions; untrack the dead
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use inv_core::SimConfig;
//! use inv_sim::{LogObserver, SimBuilder};
//!
//! let world = inv_world::load_map(path, config.city_capacity)?;
//! let mut obs = LogObserver;
//! let mut sim = SimBuilder::new(config, world).build(&mut obs)?;
//! let summary = sim.run(&mut obs)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use sim::{RunSummary, SimState, Simulation};
