use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter};

/// How a metric's native scale relates to system quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Polarity {
    /// Bounded in `[0, 1]`, larger values are better (accuracy, BLEU, ROUGE).
    #[default]
    HigherIsBetter,

    /// Bounded in `[0, 1]`, smaller values are better (word or translation error rates).
    LowerIsBetter,

    /// Bounded in `[-1, 1]`, larger values are better (correlation-style metrics).
    Bipolar,
}

impl Polarity {
    #[must_use]
    pub const fn lower_is_better(self) -> bool {
        matches!(self, Self::LowerIsBetter)
    }
}

/// Polarity classification for a set of metrics.
///
/// Metrics without an entry are treated as [`Polarity::HigherIsBetter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MetricPolarities(BTreeMap<String, Polarity>);

impl MetricPolarities {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insertion, mostly useful in tests and examples.
    #[must_use]
    pub fn with(mut self, metric: impl Into<String>, polarity: Polarity) -> Self {
        let _ = self.0.insert(metric.into(), polarity);
        self
    }

    /// Classify a metric, returning the previous classification if there was one.
    pub fn insert(&mut self, metric: impl Into<String>, polarity: Polarity) -> Option<Polarity> {
        self.0.insert(metric.into(), polarity)
    }

    #[must_use]
    pub fn polarity_of(&self, metric: &str) -> Polarity {
        self.0.get(metric).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Polarity)> {
        self.0.iter().map(|(name, polarity)| (name.as_str(), *polarity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Polarity)> for MetricPolarities {
    fn from_iter<I: IntoIterator<Item = (S, Polarity)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, polarity)| (name.into(), polarity)).collect())
    }
}
