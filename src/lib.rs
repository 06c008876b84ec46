//! # mtg-sim
//!
//! Simulation and statistics core for the MTG AI service.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every playout is a pure function of
//!    `(config, registry, rng)`. The same seed reproduces the same batch.
//!
//! 2. **Independent Games**: Games share no mutable state. Each playout
//!    derives its own RNG stream from `(seed, game_index)`, so batches
//!    parallelize safely and results never depend on thread scheduling.
//!
//! 3. **Explicit State**: The service facade owns the runner and the
//!    aggregator and is passed into request handlers. There are no
//!    module-level globals.
//!
//! ## Architecture
//!
//! - **Simulation Runner**: plays N independent two-player playouts and
//!   returns one `GameOutcome` per game, in game-index order.
//!
//! - **Statistics Aggregator**: folds outcome batches into process-wide
//!   cumulative stats. Merges are all-or-nothing per batch; snapshots are
//!   consistent point-in-time copies.
//!
//! ## Modules
//!
//! - `core`: Player seats and deterministic RNG
//! - `cards`: Card definitions and registry
//! - `sim`: Playout engine, simulation runner, game outcomes
//! - `stats`: Aggregate statistics and the thread-safe aggregator
//! - `service`: Facade, configuration, lifecycle (what the transport calls)
//! - `error`: Error taxonomy

pub mod core;
pub mod cards;
pub mod sim;
pub mod stats;
pub mod service;
pub mod error;

// Re-export commonly used types
pub use crate::core::{PlayerId, SimRng, SimRngState};

pub use crate::cards::{CardDefinition, CardId, CardKind, CardRegistry};

pub use crate::sim::{
    GameOutcome, SimulationConfig, SimulationRunner, Winner,
};

pub use crate::stats::{AggregateStats, StatsAggregator};

pub use crate::service::{
    AiService, HealthReport, ServiceConfig, SimulateReport, StatsReport,
};

pub use crate::error::SimError;
