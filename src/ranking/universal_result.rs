use super::StrategyKind;
use std::sync::Arc;

/// The aggregated outcome of one system in one aggregation run.
///
/// The reference, outputs and metric list are shared between all results of
/// a run, so cloning a result is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct UniversalMetricResult {
    reference: Arc<[String]>,
    system_output: Arc<[String]>,
    contributing_metrics: Arc<[String]>,
    strategy: StrategyKind,
    rank: u32,
    score: f64,
}

impl UniversalMetricResult {
    #[must_use]
    pub fn new(
        reference: Arc<[String]>,
        system_output: Arc<[String]>,
        contributing_metrics: Arc<[String]>,
        strategy: StrategyKind,
        rank: u32,
        score: f64,
    ) -> Self {
        Self {
            reference,
            system_output,
            contributing_metrics,
            strategy,
            rank,
            score,
        }
    }

    #[must_use]
    pub fn reference(&self) -> &[String] {
        &self.reference
    }

    #[must_use]
    pub fn system_output(&self) -> &[String] {
        &self.system_output
    }

    /// Metrics that fed into the score, in table order.
    #[must_use]
    pub fn contributing_metrics(&self) -> &[String] {
        &self.contributing_metrics
    }

    #[must_use]
    pub const fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    #[must_use]
    pub const fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    #[must_use]
    pub const fn strategy_title(&self) -> &'static str {
        self.strategy.title()
    }

    /// Dense rank, starting at 1.
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }
}
