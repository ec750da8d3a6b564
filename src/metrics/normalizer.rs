use super::{MetricPolarities, Polarity};

/// Map a raw score onto `[0, 1]`, where larger is better.
///
/// The score is first clamped to the metric's bounds (`[-1, 1]` for bipolar
/// metrics, `[0, 1]` otherwise), then bipolar scores are rescaled linearly and
/// lower-is-better scores are inverted.
#[must_use]
pub fn normalize(polarity: Polarity, raw: f64) -> f64 {
    let capped = raw.min(1.0);
    match polarity {
        Polarity::Bipolar => (capped.max(-1.0) + 1.0) / 2.0,
        Polarity::LowerIsBetter => 1.0 - capped.max(0.0),
        Polarity::HigherIsBetter => capped.max(0.0),
    }
}

/// Normalizes raw scores using a configured polarity classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreNormalizer {
    polarities: MetricPolarities,
}

impl ScoreNormalizer {
    #[must_use]
    pub const fn new(polarities: MetricPolarities) -> Self {
        Self { polarities }
    }

    #[must_use]
    pub const fn polarities(&self) -> &MetricPolarities {
        &self.polarities
    }

    #[must_use]
    pub fn normalize(&self, metric: &str, raw: f64) -> f64 {
        normalize(self.polarities.polarity_of(metric), raw)
    }
}
