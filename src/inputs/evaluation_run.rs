use crate::metrics::ScoreTable;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything an aggregation run looks at: the reference text, each system's
/// output and the per-metric scores.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRun {
    reference: Arc<[String]>,
    outputs: BTreeMap<String, Arc<[String]>>,
    scores: ScoreTable,
}

impl EvaluationRun {
    #[must_use]
    pub fn new<I, S>(reference: I, scores: ScoreTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reference: reference.into_iter().map(Into::into).collect(),
            outputs: BTreeMap::new(),
            scores,
        }
    }

    /// Attach the output produced by `system`.
    #[must_use]
    pub fn with_output<I, S>(mut self, system: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let _ = self.outputs.insert(system.into(), lines.into_iter().map(Into::into).collect());
        self
    }

    /// The same run over a different score table, e.g. a subset of systems or metrics.
    #[must_use]
    pub fn with_scores(&self, scores: ScoreTable) -> Self {
        Self {
            reference: Arc::clone(&self.reference),
            outputs: self.outputs.clone(),
            scores,
        }
    }

    #[must_use]
    pub const fn reference(&self) -> &Arc<[String]> {
        &self.reference
    }

    #[must_use]
    pub const fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// The output of `system`, or an empty output if none was supplied.
    #[must_use]
    pub fn output_of(&self, system: &str) -> Arc<[String]> {
        self.outputs.get(system).map_or_else(
            || {
                log::debug!("no output recorded for system '{system}'");
                Arc::from(Vec::new())
            },
            Arc::clone,
        )
    }
}
