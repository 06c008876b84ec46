//! Simulation engine: playouts, the batch runner, and game outcomes.
//!
//! ## Key Types
//!
//! - `GameOutcome`: Immutable record of one finished playout
//! - `Winner`: Which seat won (or a draw)
//! - `SimulationConfig`: Playout parameters (life, hand size, turn cap, deck)
//! - `SimulationRunner`: Plays N independent games, in parallel, seeded

pub mod config;
pub mod outcome;
pub mod playout;
pub mod runner;

pub use config::SimulationConfig;
pub use outcome::{GameOutcome, Winner};
pub use runner::SimulationRunner;
