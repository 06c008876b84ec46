//! Service facade: the operations the transport layer calls.
//!
//! The HTTP layer itself (routing, CORS, process lifecycle) lives outside
//! this crate. It constructs one [`AiService`] at startup and passes it
//! into request handlers — explicit application state instead of a
//! module-level global. The report types here serialize directly to the
//! wire JSON shapes.

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::cards::{CardId, CardRegistry};
use crate::error::{Result, SimError};
use crate::sim::{SimulationConfig, SimulationRunner};
use crate::stats::StatsAggregator;

/// Default port of the AI service.
pub const DEFAULT_PORT: u16 = 3002;

/// How many favorite cards the stats report carries.
const FAVORITE_CARD_LIMIT: usize = 10;

/// Install the global tracing subscriber.
///
/// Filter via `RUST_LOG` (e.g. `RUST_LOG=mtg_sim=debug`). Call once at
/// process start; tolerates being called again.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Service configuration sourced from the environment.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Port the transport should bind. `AI_PORT`, default 3002.
    pub port: u16,

    /// Fixed batch seed for reproducible runs. `AI_SEED`, default unset
    /// (every batch draws a fresh seed).
    pub seed: Option<u64>,

    /// Playout parameters.
    pub sim: SimulationConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed: None,
            sim: SimulationConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Read `AI_PORT` and `AI_SEED`, falling back to defaults (with a
    /// warning) when a variable is missing or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let port = match std::env::var("AI_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "unparseable AI_PORT, using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let seed = match std::env::var("AI_SEED") {
            Ok(raw) => match raw.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    tracing::warn!(value = %raw, "unparseable AI_SEED, ignoring");
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            port,
            seed,
            sim: SimulationConfig::default(),
        }
    }
}

/// Response body for `GET /health`.
#[derive(Clone, Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
}

/// Response body for `POST /simulate`.
#[derive(Clone, Debug, Serialize)]
pub struct SimulateReport {
    pub games_simulated: u64,
    pub status: &'static str,
    pub message: String,
}

/// Response body for `GET /stats`.
#[derive(Clone, Debug, Serialize)]
pub struct StatsReport {
    pub total_games: u64,
    pub total_wins: u64,
    pub win_rate: f64,
    pub favorite_cards: Vec<CardId>,
}

/// The AI service core: one runner, one aggregator.
///
/// Shared across concurrent requests behind an `Arc`; every method takes
/// `&self` and is safe to call from multiple threads.
///
/// ## Example
///
/// ```
/// use mtg_sim::service::{AiService, ServiceConfig};
///
/// let service = AiService::new(ServiceConfig::default());
/// service.startup();
///
/// let report = service.simulate(100).unwrap();
/// assert_eq!(report.games_simulated, 100);
///
/// let stats = service.stats().unwrap();
/// assert_eq!(stats.total_games, 100);
/// service.shutdown();
/// ```
#[derive(Debug)]
pub struct AiService {
    config: ServiceConfig,
    runner: SimulationRunner,
    stats: StatsAggregator,
}

impl AiService {
    /// Create the service with the built-in demo card set.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_registry(config, CardRegistry::demo_set())
    }

    /// Create the service with an explicit card registry.
    #[must_use]
    pub fn with_registry(config: ServiceConfig, registry: CardRegistry) -> Self {
        let runner = SimulationRunner::with_config(registry, config.sim.clone());
        Self {
            config,
            runner,
            stats: StatsAggregator::new(),
        }
    }

    /// The configuration this service was built with.
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Startup lifecycle hook. Logging only, no other side effects.
    pub fn startup(&self) {
        tracing::info!(port = self.config.port, "AI service starting up");
    }

    /// Shutdown lifecycle hook. Logging only, no other side effects.
    pub fn shutdown(&self) {
        tracing::info!("AI service shutting down");
    }

    /// `GET /health`: static liveness signal, core not involved.
    #[must_use]
    pub fn health(&self) -> HealthReport {
        HealthReport { status: "ok" }
    }

    /// `POST /simulate`: play `games` playouts and fold them into the
    /// cumulative statistics.
    ///
    /// The parameter arrives signed from the transport; anything not
    /// strictly positive (or beyond `u32::MAX`) is an `InvalidArgument`.
    pub fn simulate(&self, games: i64) -> Result<SimulateReport> {
        let games: u32 = match games {
            g if g <= 0 => {
                return Err(SimError::invalid_argument(format!(
                    "games must be a positive integer, got {games}"
                )))
            }
            g => g.try_into().map_err(|_| {
                SimError::invalid_argument(format!("games too large: {g}"))
            })?,
        };

        let outcomes = self.runner.run(games, self.config.seed)?;
        self.stats.merge(&outcomes)?;

        Ok(SimulateReport {
            games_simulated: u64::from(games),
            status: "completed",
            message: format!("Simulated {games} games"),
        })
    }

    /// `GET /stats`: project the current snapshot to the wire shape.
    pub fn stats(&self) -> Result<StatsReport> {
        let snapshot = self.stats.snapshot();

        Ok(StatsReport {
            total_games: snapshot.total_games,
            total_wins: snapshot.total_wins,
            win_rate: snapshot.win_rate(),
            favorite_cards: snapshot.favorite_cards(FAVORITE_CARD_LIMIT),
        })
    }
}
