//! Cumulative statistics derived from game outcomes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::sim::GameOutcome;

/// Cumulative statistics over every outcome merged so far.
///
/// The win rate is a derived quantity: it is recomputed from
/// `total_wins / total_games` on every call and never stored, so it can
/// never drift from the totals.
///
/// Mutation happens only inside [`super::StatsAggregator`]; callers see
/// immutable copies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Games merged so far.
    pub total_games: u64,

    /// Games won by the tracked player (seat 0). Never exceeds
    /// `total_games`.
    pub total_wins: u64,

    /// How often each card was played, across all merged games.
    pub card_frequency: FxHashMap<CardId, u64>,
}

impl AggregateStats {
    /// Create zero-valued statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracked-player win rate in `[0, 1]`. Zero before any games.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_wins as f64 / self.total_games as f64
        }
    }

    /// The most-played cards, most frequent first.
    ///
    /// Ties break toward the lower `CardId` so the ordering is total and
    /// stable across runs. At most `limit` entries.
    #[must_use]
    pub fn favorite_cards(&self, limit: usize) -> Vec<CardId> {
        let mut entries: Vec<(CardId, u64)> = self
            .card_frequency
            .iter()
            .map(|(&id, &count)| (id, count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries.into_iter().map(|(id, _)| id).collect()
    }

    /// Fold a batch of outcomes into the totals.
    ///
    /// Callers must have validated the batch first; this never fails and
    /// applies every outcome.
    pub(crate) fn accumulate(&mut self, outcomes: &[GameOutcome]) {
        self.total_games += outcomes.len() as u64;
        for outcome in outcomes {
            if outcome.winner.is_tracked_win() {
                self.total_wins += 1;
            }
            for &card in &outcome.cards_played {
                *self.card_frequency.entry(card).or_insert(0) += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Winner;

    fn win(cards: &[u32]) -> GameOutcome {
        GameOutcome::new(
            Winner::PlayerA,
            cards.iter().map(|&c| CardId::new(c)).collect(),
            10,
        )
    }

    fn loss(cards: &[u32]) -> GameOutcome {
        GameOutcome::new(
            Winner::PlayerB,
            cards.iter().map(|&c| CardId::new(c)).collect(),
            10,
        )
    }

    #[test]
    fn test_zero_state() {
        let stats = AggregateStats::new();
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.total_wins, 0);
        assert_eq!(stats.win_rate(), 0.0);
        assert!(stats.favorite_cards(10).is_empty());
    }

    #[test]
    fn test_accumulate_counts() {
        let mut stats = AggregateStats::new();
        stats.accumulate(&[win(&[1, 2]), loss(&[1]), win(&[3])]);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.total_wins, 2);
        assert_eq!(stats.card_frequency[&CardId::new(1)], 2);
        assert_eq!(stats.card_frequency[&CardId::new(2)], 1);
        assert_eq!(stats.card_frequency[&CardId::new(3)], 1);
    }

    #[test]
    fn test_win_rate_is_recomputed() {
        let mut stats = AggregateStats::new();
        stats.accumulate(&[win(&[]), loss(&[])]);
        assert_eq!(stats.win_rate(), 0.5);

        stats.accumulate(&[loss(&[]), loss(&[])]);
        assert_eq!(stats.win_rate(), 0.25);
    }

    #[test]
    fn test_draws_are_not_wins() {
        let mut stats = AggregateStats::new();
        stats.accumulate(&[GameOutcome::new(Winner::Draw, vec![], 50)]);

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.total_wins, 0);
    }

    #[test]
    fn test_wins_never_exceed_games() {
        let mut stats = AggregateStats::new();
        stats.accumulate(&[win(&[]), win(&[]), loss(&[])]);
        assert!(stats.total_wins <= stats.total_games);
    }

    #[test]
    fn test_favorite_cards_ordering() {
        let mut stats = AggregateStats::new();
        // Card 5 twice, card 2 twice, card 9 once.
        stats.accumulate(&[win(&[5, 2]), loss(&[2, 5, 9])]);

        // Equal counts tie-break toward the lower id.
        assert_eq!(
            stats.favorite_cards(10),
            vec![CardId::new(2), CardId::new(5), CardId::new(9)]
        );

        // Limit truncates.
        assert_eq!(stats.favorite_cards(1), vec![CardId::new(2)]);
    }

    #[test]
    fn test_serialization() {
        let mut stats = AggregateStats::new();
        stats.accumulate(&[win(&[1])]);

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: AggregateStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }
}
