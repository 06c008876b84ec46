//! Player seat identification for two-player games.
//!
//! The playout is strictly two-player: seat 0 and seat 1. Seat 0 is the
//! **tracked player** — the side whose wins feed `total_wins` in the
//! aggregate statistics.

use serde::{Deserialize, Serialize};

/// Seat identifier in a two-player game.
///
/// Seat indices are 0-based. Seat 0 is the tracked player.
///
/// ```
/// use mtg_sim::core::PlayerId;
///
/// let a = PlayerId::new(0);
/// assert_eq!(a.opponent(), PlayerId::new(1));
/// assert_eq!(a.opponent().opponent(), a);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Seat of the tracked player.
    pub const TRACKED: PlayerId = PlayerId(0);

    /// Create a new seat ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!(id < 2, "two-player game: seat must be 0 or 1");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Check whether this seat is the tracked player.
    #[must_use]
    pub const fn is_tracked(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
