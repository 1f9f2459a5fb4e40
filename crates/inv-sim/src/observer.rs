//! Simulation observer trait for progress reporting and event collection.

use inv_world::{Destruction, Move};

use crate::RunSummary;

/// Callbacks invoked by [`Simulation`][crate::Simulation] as the run unfolds.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  `step` is 0 for the collisions resolved
/// right after seeding and counts successful moves from 1 afterwards.
///
/// # Example — casualty counter
///
/// ```rust,ignore
/// struct Casualties(usize);
///
/// impl SimObserver for Casualties {
///     fn on_city_destroyed(&mut self, _step: u64, event: &Destruction) {
///         self.0 += event.aliens.len();
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each successful move, before collisions are resolved.
    fn on_move(&mut self, _step: u64, _mv: &Move) {}

    /// Called once per city destroyed in a fight.
    fn on_city_destroyed(&mut self, _step: u64, _event: &Destruction) {}

    /// Called once when the run terminates normally.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Reports the run through `tracing`: one `info` event per destroyed city,
/// `debug` per move.
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_move(&mut self, step: u64, mv: &Move) {
        tracing::debug!(step, alien = %mv.alien.name(), from = %mv.from, to = %mv.to, "alien moved");
    }

    fn on_city_destroyed(&mut self, step: u64, event: &Destruction) {
        tracing::info!(step, "{event}");
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        tracing::info!(
            steps            = summary.steps,
            surviving_aliens = summary.surviving_aliens,
            surviving_cities = summary.surviving_cities,
            "simulation complete",
        );
    }
}

/// Fan every callback out to both observers, first `A` then `B`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_move(&mut self, step: u64, mv: &Move) {
        self.0.on_move(step, mv);
        self.1.on_move(step, mv);
    }

    fn on_city_destroyed(&mut self, step: u64, event: &Destruction) {
        self.0.on_city_destroyed(step, event);
        self.1.on_city_destroyed(step, event);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        self.0.on_sim_end(summary);
        self.1.on_sim_end(summary);
    }
}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_move(&mut self, step: u64, mv: &Move) {
        (**self).on_move(step, mv);
    }

    fn on_city_destroyed(&mut self, step: u64, event: &Destruction) {
        (**self).on_city_destroyed(step, event);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        (**self).on_sim_end(summary);
    }
}
