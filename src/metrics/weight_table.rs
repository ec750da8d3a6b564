use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weights attached to metrics by one weighting scheme.
///
/// Serialized as a flat `{metric: weight}` document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WeightTable(BTreeMap<String, f64>);

impl WeightTable {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn with(mut self, metric: impl Into<String>, weight: f64) -> Self {
        let _ = self.0.insert(metric.into(), weight);
        self
    }

    pub fn insert(&mut self, metric: impl Into<String>, weight: f64) -> Option<f64> {
        self.0.insert(metric.into(), weight)
    }

    /// The weight of a metric, or `None` if the scheme does not mention it.
    #[must_use]
    pub fn weight_of(&self, metric: &str) -> Option<f64> {
        self.0.get(metric).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, weight)| (name.as_str(), *weight))
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

impl<S: Into<String>> FromIterator<(S, f64)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, weight)| (name.into(), weight)).collect())
    }
}
