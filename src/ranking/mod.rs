//! Cross-metric aggregation and ranking of systems
//!
//! This module turns a [`ScoreTable`](crate::metrics::ScoreTable) into one
//! scalar per system and a dense ranking of those scalars.
//!
//! # Implementation Model
//!
//! The six strategies form the closed enum [`Aggregation`]. Each variant
//! carries only what it needs: a [`WeightTable`](crate::metrics::WeightTable)
//! for the weighted strategies, a polarity classification for the strategies
//! that look at a metric's native direction.
//!
//! - **Average** / **Median**: central tendency of raw scores
//! - **`WeightedMean`**: raw scores weighted and divided by the total weight
//! - **`WeightedSum`**: normalized scores weighted and summed
//! - **`PairwiseComparison`**: per-metric wins between exactly two systems
//! - **`SocialChoiceTheory`**: Borda count over per-metric rankings
//!
//! Every strategy produces its scores in the table's system order, after
//! which [`rank_systems`] assigns dense ranks. Ranks are computed from a stable
//! sort using a total order on `f64`, and ties are detected by exact equality,
//! so identical inputs always produce bit-identical ranks.
//!
//! [`Aggregation::aggregate`] packages the ranking together with the reference
//! and system outputs into a [`MultipleUniversalMetricResult`], which checks
//! that all of its members describe the same run.

mod aggregation;
mod average;
mod borda;
mod median;
mod multiple_result;
mod pairwise;
mod rank_assigner;
mod strategy_kind;
mod universal_result;
mod weighted;

pub use aggregation::Aggregation;
pub use multiple_result::MultipleUniversalMetricResult;
pub use pairwise::PairwiseOutcome;
pub use rank_assigner::{RankOrder, RankedScore, dense_ranks, rank_systems};
pub use strategy_kind::StrategyKind;
pub use universal_result::UniversalMetricResult;
