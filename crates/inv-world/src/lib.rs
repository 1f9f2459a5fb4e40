//! `inv-world` — the city graph the invasion plays out on.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`map`]     | `WorldMap`, `City`, `Alien`, `Move`, `Destruction`       |
//! | [`seeding`] | `SeedCandidate`, `WorldMap::seed_aliens`                 |
//! | [`loader`]  | `load_map`, `load_map_reader` (text map format)          |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                           |
//!
//! # Invariants
//!
//! - Every link points at a live city, in both directions: if `A` has road
//!   `d` to `B` then `B` lists `(d, A)` as an inbound road.
//! - Every live alien sits in exactly one live city, and that city lists it
//!   as an occupant.
//! - After [`WorldMap::resolve_collisions`] no city is at capacity.

pub mod error;
pub mod loader;
pub mod map;
pub mod seeding;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use loader::{load_map, load_map_reader};
pub use map::{Alien, City, Destruction, Move, WorldMap};
pub use seeding::SeedCandidate;
