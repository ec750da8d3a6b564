use super::EvaluationRun;
use crate::Result;
use crate::config::read_document;
use crate::metrics::{CoverageGap, MetricScore, ScoreTable, coverage_gaps};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A score document as written by upstream scorers.
///
/// ```toml
/// reference = ["the cat sat on the mat"]
///
/// [outputs]
/// baseline = ["a cat sat on a mat"]
///
/// [[scores]]
/// metric = "bleu"
/// system = "baseline"
/// value = 0.42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreDocument {
    /// Reference text the systems were evaluated against, one entry per segment.
    #[serde(default)]
    pub reference: Vec<String>,

    /// Output of each system, one entry per segment.
    #[serde(default)]
    pub outputs: BTreeMap<String, Vec<String>>,

    /// Raw metric scores.
    #[serde(default)]
    pub scores: Vec<MetricScore>,
}

impl ScoreDocument {
    /// Load a score document, choosing the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let document: Self = read_document(path)?;
        log::info!("loaded {} score(s) from '{path}'", document.scores.len());
        Ok(document)
    }

    /// Metrics that do not score every system named in the document.
    #[must_use]
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        coverage_gaps(&self.scores)
    }

    /// Build the evaluation run described by this document.
    ///
    /// # Errors
    ///
    /// Returns an error if the scores do not form a valid [`ScoreTable`].
    pub fn into_run(self) -> Result<EvaluationRun> {
        let table = ScoreTable::from_scores(self.scores)?;

        let mut run = EvaluationRun::new(self.reference, table);
        for (system, lines) in self.outputs {
            if !run.scores().systems().contains(&system) {
                log::warn!("ignoring output of system '{system}', which has no scores");
                continue;
            }
            run = run.with_output(system, lines);
        }

        Ok(run)
    }
}
