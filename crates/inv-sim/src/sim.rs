//! The `Simulation` struct and its step loop.

use rustc_hash::FxHashMap;

use inv_core::{AlienId, BudgetPolicy, SimConfig, SimRng};
use inv_world::WorldMap;

use crate::{SimObserver, SimResult};

/// Whether [`Simulation::step`] can still make progress.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimState {
    Running,
    /// No aliens are left, or every tracked alien has spent its budget, or a
    /// step failed.  Terminal: further steps are no-ops.
    Terminated,
}

/// Totals reported when a run ends.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunSummary {
    /// Successful moves made.
    pub steps:            u64,
    pub surviving_aliens: usize,
    pub surviving_cities: usize,
}

/// The invasion runner.
///
/// Owns the world for the whole run.  Create via
/// [`SimBuilder`][crate::SimBuilder], drive with [`run`](Self::run) or
/// [`step`](Self::step), then hand the world to a writer with
/// [`into_world`](Self::into_world).  The world is left in a consistent state
/// even when a step fails.
pub struct Simulation {
    pub config: SimConfig,

    pub(crate) world: WorldMap,

    /// Source of every random choice; seeded from `config.seed`.
    pub(crate) rng: SimRng,

    /// Moves made so far by each alien still under `config.move_budget`.
    /// Aliens leave this map when they reach the budget or die.
    pub(crate) move_counts: FxHashMap<AlienId, u32>,

    pub(crate) state: SimState,

    pub(crate) steps: u64,
}

impl Simulation {
    // ── Public API ────────────────────────────────────────────────────────

    /// Step until the simulation terminates.
    ///
    /// A step that finds no legal move anywhere fails the run with
    /// `WorldError::NoMovePossible`; the world keeps everything that happened
    /// up to that point.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while self.step(observer)? == SimState::Running {}
        Ok(self.summary())
    }

    /// Run at most `n` steps and return the resulting state.
    ///
    /// Useful for tests and for callers that want to check for cancellation
    /// between batches.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<SimState> {
        for _ in 0..n {
            if self.step(observer)? == SimState::Terminated {
                break;
            }
        }
        Ok(self.state)
    }

    /// Move one alien, resolve the fights it causes, and update budgets.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimState> {
        if self.state == SimState::Terminated {
            return Ok(SimState::Terminated);
        }
        if self.finished() {
            self.terminate(observer);
            return Ok(self.state);
        }

        let policy  = self.config.budget_policy;
        let tracked = &self.move_counts;
        let result  = self.world.move_one_alien(&mut self.rng, |alien| {
            policy == BudgetPolicy::KeepMoving || tracked.contains_key(&alien)
        });
        let mv = match result {
            Ok(mv) => mv,
            Err(e) => {
                self.state = SimState::Terminated;
                return Err(e.into());
            }
        };

        self.steps += 1;
        self.count_move(mv.alien);
        observer.on_move(self.steps, &mv);

        for event in self.world.resolve_collisions() {
            for alien in &event.aliens {
                self.move_counts.remove(alien);
            }
            observer.on_city_destroyed(self.steps, &event);
        }

        if self.finished() {
            self.terminate(observer);
        }
        Ok(self.state)
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Successful moves made so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    pub fn into_world(self) -> WorldMap {
        self.world
    }

    /// Number of aliens still under their move budget.
    pub fn tracked_aliens(&self) -> usize {
        self.move_counts.len()
    }

    /// Moves made by `alien`, or `None` once it is no longer tracked.
    pub fn move_count(&self, alien: AlienId) -> Option<u32> {
        self.move_counts.get(&alien).copied()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            steps:            self.steps,
            surviving_aliens: self.world.num_aliens(),
            surviving_cities: self.world.num_cities(),
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn finished(&self) -> bool {
        self.world.num_aliens() == 0 || self.move_counts.is_empty()
    }

    fn terminate<O: SimObserver>(&mut self, observer: &mut O) {
        self.state = SimState::Terminated;
        observer.on_sim_end(&self.summary());
    }

    fn count_move(&mut self, alien: AlienId) {
        let exhausted = match self.move_counts.get_mut(&alien) {
            Some(count) => {
                *count += 1;
                *count >= self.config.move_budget
            }
            None => false,
        };
        if exhausted {
            self.move_counts.remove(&alien);
        }
    }
}
