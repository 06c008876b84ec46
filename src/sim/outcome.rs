//! Per-game outcome records.
//!
//! A `GameOutcome` is produced once per simulated game, consumed by the
//! statistics aggregator, and then discarded. It is never mutated after
//! construction.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;

/// The result of one game from the tracked player's perspective.
///
/// `PlayerA` is seat 0 — the **tracked player** whose wins are counted
/// by the aggregate statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    PlayerA,
    PlayerB,
    Draw,
}

impl Winner {
    /// Map a winning seat to its `Winner` variant.
    #[must_use]
    pub fn from_seat(seat: PlayerId) -> Self {
        if seat.is_tracked() {
            Self::PlayerA
        } else {
            Self::PlayerB
        }
    }

    /// Check whether the tracked player won.
    #[must_use]
    pub fn is_tracked_win(self) -> bool {
        self == Self::PlayerA
    }
}

/// Immutable record of one finished playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Who won, from the tracked player's perspective.
    pub winner: Winner,

    /// Every card played during the game, in play order, both seats.
    pub cards_played: Vec<CardId>,

    /// Turns elapsed when the game ended. Always >= 0 for outcomes the
    /// runner produces; the aggregator rejects anything negative.
    pub turn_count: i64,
}

impl GameOutcome {
    /// Create a new outcome record.
    #[must_use]
    pub fn new(winner: Winner, cards_played: Vec<CardId>, turn_count: i64) -> Self {
        Self {
            winner,
            cards_played,
            turn_count,
        }
    }

    /// Check the structural invariant the aggregator requires.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.turn_count >= 0
    }
}
