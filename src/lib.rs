//! Universal metric aggregation and ranking
//!
//! This crate combines per-metric, per-system scores produced by NLP evaluation metrics
//! (BLEU-like scorers, classifiers, error rates, correlation-style metrics) into a single
//! cross-metric ranking of systems.
//!
//! # Module Organization
//!
//! - [`metrics`]: Score tables, weight tables, metric polarity and normalization
//! - [`ranking`]: Dense rank assignment, the aggregation strategies and the result model
//! - [`config`]: Configuration documents (polarity classification, weighting schemes)
//! - [`inputs`]: Score documents handed to the engine by upstream scorers
//! - [`reports`]: Console, CSV and JSON renderings of aggregation results
//!
//! # Example
//!
//! ```
//! use universal_metrics::metrics::ScoreTable;
//! use universal_metrics::ranking::Aggregation;
//!
//! let table = ScoreTable::from_metric_rows([
//!     ("bleu", vec![("baseline", 0.21), ("candidate", 0.27)]),
//!     ("chrf", vec![("baseline", 0.48), ("candidate", 0.52)]),
//! ])?;
//!
//! let ranked = Aggregation::Average.rank(&table)?;
//! assert_eq!(ranked[1].system, "candidate");
//! assert_eq!(ranked[1].rank, 1);
//! # Ok::<(), ohno::AppError>(())
//! ```

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod commands;

pub mod config;
pub mod inputs;
pub mod metrics;
pub mod ranking;
pub mod reports;

pub use crate::commands::{Host, run};
