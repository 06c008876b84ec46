//! Statistics aggregation over game outcomes.
//!
//! ## Key Types
//!
//! - `AggregateStats`: Cumulative totals and card frequencies. Win rate is
//!   always recomputed from the totals, never stored.
//! - `StatsAggregator`: Thread-safe process-wide accumulator. Merges are
//!   all-or-nothing per batch; snapshots are consistent copies.

pub mod aggregate;
pub mod aggregator;

pub use aggregate::AggregateStats;
pub use aggregator::StatsAggregator;
