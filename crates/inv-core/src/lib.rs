//! `inv-core` — foundational types shared by every `inv-*` crate.
//!
//! # What lives here
//!
//! | Module      | Contents                                     |
//! |-------------|----------------------------------------------|
//! | [`ids`]     | `CityId`, `AlienId`                          |
//! | [`config`]  | `SimConfig`, `BudgetPolicy`                  |
//! | [`rng`]     | `SimRng` (seeded, reproducible)              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `SimConfig`. |

pub mod config;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BudgetPolicy, SimConfig, DEFAULT_CITY_CAPACITY, DEFAULT_MOVE_BUDGET};
pub use ids::{AlienId, CityId};
pub use rng::SimRng;
