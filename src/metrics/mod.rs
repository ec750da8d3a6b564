//! Score tables and per-metric scale handling
//!
//! This module holds the inputs of the aggregation engine: the per-metric,
//! per-system raw scores produced by upstream scorers, the weights attached to
//! metrics by a weighting scheme, and the polarity classification that says
//! how each metric's native scale maps onto "higher is better".
//!
//! # Implementation Model
//!
//! A [`ScoreTable`] is built once from a flat list of [`MetricScore`] values
//! and is immutable afterwards. It keeps metrics and systems in the order in
//! which they first appear, so every strategy iterates them deterministically.
//! Construction rejects tables where some metric does not cover every system.
//!
//! [`MetricPolarities`] classifies metrics as higher-is-better, lower-is-better
//! or bipolar. The classification is configuration, not code: unknown metrics
//! default to higher-is-better. [`ScoreNormalizer`] uses it to map raw scores
//! onto `[0, 1]`.

mod coverage;
mod metric_score;
mod normalizer;
mod polarity;
mod score_table;
mod weight_table;

pub use coverage::{CoverageGap, coverage_gaps};
pub use metric_score::MetricScore;
pub use normalizer::{ScoreNormalizer, normalize};
pub use polarity::{MetricPolarities, Polarity};
pub use score_table::ScoreTable;
pub use weight_table::WeightTable;
