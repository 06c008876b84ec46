//! Batch simulation runner — plays N independent games in parallel.
//!
//! Each game derives its own RNG stream from `(batch_seed, game_index)`,
//! so a seeded batch reproduces exactly, regardless of how rayon schedules
//! the games across worker threads. Results come back in game-index order.

use rayon::prelude::*;

use crate::cards::CardRegistry;
use crate::core::SimRng;
use crate::error::{Result, SimError};

use super::config::SimulationConfig;
use super::outcome::GameOutcome;
use super::playout::play_game;

/// Plays batches of independent games.
///
/// The runner holds only immutable inputs (config and registry); it never
/// touches the statistics aggregator. `run` may be called concurrently
/// from multiple requests.
///
/// ## Example
///
/// ```
/// use mtg_sim::cards::CardRegistry;
/// use mtg_sim::sim::SimulationRunner;
///
/// let runner = SimulationRunner::new(CardRegistry::demo_set());
/// let outcomes = runner.run(100, Some(42)).unwrap();
/// assert_eq!(outcomes.len(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationRunner {
    config: SimulationConfig,
    registry: CardRegistry,
}

impl SimulationRunner {
    /// Create a runner with the default playout configuration.
    #[must_use]
    pub fn new(registry: CardRegistry) -> Self {
        Self::with_config(registry, SimulationConfig::default())
    }

    /// Create a runner with an explicit playout configuration.
    #[must_use]
    pub fn with_config(registry: CardRegistry, config: SimulationConfig) -> Self {
        Self { config, registry }
    }

    /// The playout configuration this runner uses.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play `games` independent games and return their outcomes.
    ///
    /// Returns exactly `games` outcomes, in game-index order. With a fixed
    /// seed the whole batch is reproducible; with `None` a seed is drawn
    /// from OS entropy and logged so the batch can be replayed later.
    ///
    /// Fails with `InvalidArgument` if `games` is zero or the configured
    /// deck is unusable.
    pub fn run(&self, games: u32, seed: Option<u64>) -> Result<Vec<GameOutcome>> {
        if games == 0 {
            return Err(SimError::invalid_argument("game count must be positive"));
        }

        let batch_seed = seed.unwrap_or_else(rand::random);
        tracing::debug!(games, seed = batch_seed, "starting simulation batch");

        let outcomes = (0..u64::from(games))
            .into_par_iter()
            .map(|index| play_game(&self.config, &self.registry, SimRng::for_game(batch_seed, index)))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            games,
            seed = batch_seed,
            tracked_wins = outcomes.iter().filter(|o| o.winner.is_tracked_win()).count(),
            "simulation batch complete"
        );

        Ok(outcomes)
    }
}
