//! Core building blocks: player seats and deterministic RNG.
//!
//! These types are game-model-agnostic. The playout in `sim` interprets
//! them; nothing here knows about cards or rules.

pub mod player;
pub mod rng;

pub use player::PlayerId;
pub use rng::{SimRng, SimRngState};
