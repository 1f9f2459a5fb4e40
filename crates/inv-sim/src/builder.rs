//! Fluent builder for constructing a [`Simulation`].

use inv_core::{SimConfig, SimRng};
use inv_world::WorldMap;

use crate::{SimError, SimObserver, SimResult, SimState, Simulation};

/// Validates a [`SimConfig`] against a [`WorldMap`] and seeds the invasion.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, world).build(&mut NoopObserver)?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    world:  WorldMap,
}

impl SimBuilder {
    pub fn new(config: SimConfig, world: WorldMap) -> Self {
        Self { config, world }
    }

    /// Validate inputs, seed `config.alien_count` aliens, fight out any city
    /// seeded to capacity, and return a running [`Simulation`].
    ///
    /// Cities destroyed by that first fight are reported to `observer` with
    /// step 0.  Aliens that survive it start tracked with zero moves.
    pub fn build<O: SimObserver>(self, observer: &mut O) -> SimResult<Simulation> {
        let config = self.config;

        // ── Validate configuration ────────────────────────────────────────
        if config.city_capacity < 2 {
            return Err(SimError::Config(format!(
                "city capacity must be at least 2, got {}",
                config.city_capacity
            )));
        }
        if config.city_capacity != self.world.capacity() {
            return Err(SimError::Config(format!(
                "city capacity {} does not match the map's capacity {}",
                config.city_capacity,
                self.world.capacity()
            )));
        }
        if config.move_budget == 0 {
            return Err(SimError::Config("move budget must be at least 1".to_owned()));
        }

        // ── Seed and fight ────────────────────────────────────────────────
        let mut world = self.world;
        world.seed_aliens(config.alien_count)?;
        for event in world.resolve_collisions() {
            observer.on_city_destroyed(0, &event);
        }

        let move_counts = world.aliens().map(|a| (a.id, 0)).collect();

        Ok(Simulation {
            rng: SimRng::new(config.seed),
            config,
            world,
            move_counts,
            state: SimState::Running,
            steps: 0,
        })
    }
}
