use serde::{Deserialize, Serialize};

/// A single raw score of one system on one metric.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricScore {
    pub metric: String,
    pub system: String,
    pub value: f64,
}

impl MetricScore {
    #[must_use]
    pub fn new(metric: impl Into<String>, system: impl Into<String>, value: f64) -> Self {
        Self {
            metric: metric.into(),
            system: system.into(),
            value,
        }
    }
}
