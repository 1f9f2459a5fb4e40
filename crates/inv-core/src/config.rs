//! Run configuration.

/// Aliens a city can hold before they fight and destroy it.
pub const DEFAULT_CITY_CAPACITY: usize = 2;

/// Moves an alien must make before it stops counting towards termination.
pub const DEFAULT_MOVE_BUDGET: u32 = 1_000;

/// What happens to an alien once it has spent its move budget.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BudgetPolicy {
    /// The alien is no longer tracked but may still be picked to move.
    #[default]
    KeepMoving,
    /// The alien stays where it is for the rest of the run.
    Freeze,
}

/// Parameters for one simulation run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Aliens to seed before the first move.
    pub alien_count: usize,

    /// Per-alien move budget.  Must be at least 1.
    pub move_budget: u32,

    /// Occupants at which a city is destroyed.  Must be at least 2.
    pub city_capacity: usize,

    /// Seed for every random choice made during the run.
    pub seed: u64,

    pub budget_policy: BudgetPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            alien_count:   0,
            move_budget:   DEFAULT_MOVE_BUDGET,
            city_capacity: DEFAULT_CITY_CAPACITY,
            seed:          0,
            budget_policy: BudgetPolicy::KeepMoving,
        }
    }
}
