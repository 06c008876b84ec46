//! Thread-safe process-wide statistics accumulator.
//!
//! The aggregator is a pure accumulator over an unbounded stream of merge
//! calls: it starts at zero and never resets within a process lifetime.
//! A single `RwLock` makes each merge atomic as a batch and gives
//! snapshots a consistent point-in-time view — a reader can never observe
//! half of a batch.

use std::sync::{PoisonError, RwLock};

use crate::error::{Result, SimError};
use crate::sim::GameOutcome;

use super::aggregate::AggregateStats;

/// Process-wide statistics accumulator.
///
/// Concurrent merges from in-flight simulate calls serialize on the write
/// lock; concurrent snapshots share the read lock. Disjoint batches merge
/// associatively and commutatively, so the final totals do not depend on
/// merge order.
///
/// ## Example
///
/// ```
/// use mtg_sim::sim::{GameOutcome, Winner};
/// use mtg_sim::stats::StatsAggregator;
///
/// let aggregator = StatsAggregator::new();
/// aggregator
///     .merge(&[GameOutcome::new(Winner::PlayerA, vec![], 7)])
///     .unwrap();
///
/// let snapshot = aggregator.snapshot();
/// assert_eq!(snapshot.total_games, 1);
/// assert_eq!(snapshot.win_rate(), 1.0);
/// ```
#[derive(Debug, Default)]
pub struct StatsAggregator {
    inner: RwLock<AggregateStats>,
}

impl StatsAggregator {
    /// Create an aggregator at zero values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a batch of outcomes and return the updated statistics.
    ///
    /// All-or-nothing: every outcome is validated before any state
    /// changes, so a malformed batch leaves the totals untouched.
    /// Fails with `InvalidArgument` on a negative turn count.
    ///
    /// Caller discipline: a batch must not be merged twice.
    pub fn merge(&self, outcomes: &[GameOutcome]) -> Result<AggregateStats> {
        for (index, outcome) in outcomes.iter().enumerate() {
            if !outcome.is_well_formed() {
                return Err(SimError::invalid_argument(format!(
                    "outcome {index} has negative turn count {}",
                    outcome.turn_count
                )));
            }
        }

        // A poisoned lock only means another merge panicked; the stats
        // themselves are still coherent (accumulate has no partial state),
        // so recover the guard rather than failing every later request.
        let mut stats = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        stats.accumulate(outcomes);
        Ok(stats.clone())
    }

    /// Consistent point-in-time copy of the statistics.
    ///
    /// Returns a copy, never a reference to interior state.
    #[must_use]
    pub fn snapshot(&self) -> AggregateStats {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
