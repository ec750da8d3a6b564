//! Inputs handed to the engine by upstream scorers
//!
//! A [`ScoreDocument`] is the on-disk form: reference text, system outputs
//! and a flat list of per-metric scores, in TOML, YAML or JSON. Turning it
//! into an [`EvaluationRun`] builds the [`ScoreTable`](crate::metrics::ScoreTable)
//! and fails if the scores are inconsistent; `ScoreDocument::coverage_gaps`
//! reports missing scores beforehand so callers can show them as warnings.

mod evaluation_run;
mod score_document;

pub use evaluation_run::EvaluationRun;
pub use score_document::ScoreDocument;
