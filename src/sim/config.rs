//! Playout configuration.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Parameters for a single playout.
///
/// The same config is shared by every game in a batch; per-game variance
/// comes only from the RNG stream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Life each seat starts with.
    pub starting_life: i64,

    /// Cards drawn before turn 1.
    pub starting_hand_size: usize,

    /// Turn cap: games still running after this many turns are draws.
    pub max_turns: i64,

    /// Deck list both seats play. `None` uses the registry's default deck.
    pub deck: Option<Vec<CardId>>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            starting_life: 20,
            starting_hand_size: 7,
            max_turns: 50,
            deck: None,
        }
    }
}

impl SimulationConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting life total.
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the opening hand size.
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the turn cap.
    pub fn with_max_turns(mut self, turns: i64) -> Self {
        self.max_turns = turns;
        self
    }

    /// Set an explicit deck list for both seats.
    pub fn with_deck(mut self, deck: Vec<CardId>) -> Self {
        self.deck = Some(deck);
        self
    }
}
