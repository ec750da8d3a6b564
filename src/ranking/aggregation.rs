use super::average::average_scores;
use super::borda::borda_scores;
use super::median::median_scores;
use super::weighted::{weighted_mean_scores, weighted_metrics, weighted_sum_scores};
use super::{MultipleUniversalMetricResult, PairwiseOutcome, RankOrder, RankedScore, StrategyKind, UniversalMetricResult, rank_systems};
use crate::Result;
use crate::inputs::EvaluationRun;
use crate::metrics::{MetricPolarities, ScoreNormalizer, ScoreTable, WeightTable};
use ohno::app_err;
use std::sync::Arc;

/// A cross-metric aggregation strategy, carrying the parameters it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregation {
    /// Mean of raw scores.
    Average,

    /// Median of raw scores.
    Median,

    /// Weighted sum of normalized scores.
    WeightedSum {
        weights: WeightTable,
        normalizer: ScoreNormalizer,
    },

    /// Weighted mean of raw scores.
    WeightedMean { weights: WeightTable },

    /// Per-metric wins between exactly two systems.
    PairwiseComparison { polarities: MetricPolarities },

    /// Borda count over per-metric rankings.
    SocialChoiceTheory { polarities: MetricPolarities },
}

impl Aggregation {
    /// Build the strategy named by `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is a weighted strategy and no weights are given.
    pub fn from_kind(kind: StrategyKind, polarities: &MetricPolarities, weights: Option<&WeightTable>) -> Result<Self> {
        let require_weights = || weights.cloned().ok_or_else(|| app_err!("the {} strategy requires a weighting scheme", kind.title()));

        Ok(match kind {
            StrategyKind::Average => Self::Average,
            StrategyKind::Median => Self::Median,
            StrategyKind::WeightedSum => Self::WeightedSum {
                weights: require_weights()?,
                normalizer: ScoreNormalizer::new(polarities.clone()),
            },
            StrategyKind::WeightedMean => Self::WeightedMean {
                weights: require_weights()?,
            },
            StrategyKind::PairwiseComparison => Self::PairwiseComparison {
                polarities: polarities.clone(),
            },
            StrategyKind::SocialChoiceTheory => Self::SocialChoiceTheory {
                polarities: polarities.clone(),
            },
        })
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Average => StrategyKind::Average,
            Self::Median => StrategyKind::Median,
            Self::WeightedSum { .. } => StrategyKind::WeightedSum,
            Self::WeightedMean { .. } => StrategyKind::WeightedMean,
            Self::PairwiseComparison { .. } => StrategyKind::PairwiseComparison,
            Self::SocialChoiceTheory { .. } => StrategyKind::SocialChoiceTheory,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind().name()
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.kind().title()
    }

    /// The table metrics that feed into the score, in table order.
    ///
    /// This is every metric of the table, except for the weighted strategies,
    /// which only look at metrics that have a weight.
    #[must_use]
    pub fn contributing_metrics(&self, table: &ScoreTable) -> Vec<String> {
        match self {
            Self::WeightedSum { weights, .. } | Self::WeightedMean { weights } => weighted_metrics(table, weights)
                .into_iter()
                .map(|(index, _)| table.metrics()[index].clone())
                .collect(),
            _ => table.metrics().to_vec(),
        }
    }

    /// One aggregated score per system, in the table's system order.
    ///
    /// # Errors
    ///
    /// Returns an error when the table does not meet the strategy's
    /// preconditions: no metrics for average or median, a zero total weight
    /// for the weighted mean, or other than two systems for pairwise comparison.
    pub fn score(&self, table: &ScoreTable) -> Result<Vec<f64>> {
        match self {
            Self::Average => average_scores(table),
            Self::Median => median_scores(table),
            Self::WeightedSum { weights, normalizer } => Ok(weighted_sum_scores(table, weights, normalizer)),
            Self::WeightedMean { weights } => weighted_mean_scores(table, weights),
            Self::PairwiseComparison { polarities } => Ok(PairwiseOutcome::compare(table, polarities)?.scores()),
            Self::SocialChoiceTheory { polarities } => Ok(borda_scores(table, polarities)),
        }
    }

    /// Aggregated scores with their dense ranks, in the table's system order.
    ///
    /// Larger aggregated scores always rank first.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Aggregation::score`].
    pub fn rank(&self, table: &ScoreTable) -> Result<Vec<RankedScore>> {
        let scores = self.score(table)?;
        Ok(rank_systems(table.systems(), &scores, RankOrder::Descending))
    }

    /// Rank every system of `run` and package the outcome.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Aggregation::score`].
    pub fn aggregate(&self, run: &EvaluationRun) -> Result<MultipleUniversalMetricResult> {
        let table = run.scores();
        let ranked = self.rank(table)?;
        let metrics: Arc<[String]> = self.contributing_metrics(table).into();

        log::info!(
            "{} ranked {} system(s) over {} metric(s)",
            self.title(),
            ranked.len(),
            metrics.len()
        );

        let results = ranked
            .into_iter()
            .map(|entry| {
                let result = UniversalMetricResult::new(
                    Arc::clone(run.reference()),
                    run.output_of(&entry.system),
                    Arc::clone(&metrics),
                    self.kind(),
                    entry.rank,
                    entry.score,
                );
                (entry.system, result)
            })
            .collect();

        MultipleUniversalMetricResult::new(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Polarity;
    use strum::IntoEnumIterator;

    fn mock_table() -> ScoreTable {
        ScoreTable::from_metric_rows([
            ("mock_1", vec![("Sys1", 0.1), ("Sys2", 0.1), ("Sys3", 0.3)]),
            ("mock_2", vec![("Sys1", 0.1), ("Sys2", 0.2), ("Sys3", 0.3)]),
            ("mock_3", vec![("Sys1", 0.1), ("Sys2", 0.3), ("Sys3", 0.3)]),
        ])
        .unwrap()
    }

    fn ranks(ranked: &[RankedScore]) -> Vec<(&str, u32)> {
        ranked.iter().map(|r| (r.system.as_str(), r.rank)).collect()
    }

    #[test]
    fn test_from_kind_matches_kind() {
        let weights = WeightTable::new().with("mock_1", 1.0);
        for kind in StrategyKind::iter() {
            let aggregation = Aggregation::from_kind(kind, &MetricPolarities::new(), Some(&weights)).unwrap();
            assert_eq!(aggregation.kind(), kind);
            assert_eq!(aggregation.name(), kind.name());
            assert_eq!(aggregation.title(), kind.title());
        }
    }

    #[test]
    fn test_weighted_strategies_require_weights() {
        let polarities = MetricPolarities::new();
        assert!(Aggregation::from_kind(StrategyKind::WeightedSum, &polarities, None).is_err());
        assert!(Aggregation::from_kind(StrategyKind::WeightedMean, &polarities, None).is_err());
        assert!(Aggregation::from_kind(StrategyKind::Median, &polarities, None).is_ok());
    }

    #[test]
    fn test_weighted_sum_passes_polarities_to_normalizer() {
        let polarities = MetricPolarities::new().with("wer", Polarity::LowerIsBetter);
        let weights = WeightTable::new().with("wer", 1.0);
        let aggregation = Aggregation::from_kind(StrategyKind::WeightedSum, &polarities, Some(&weights)).unwrap();

        let table = ScoreTable::from_metric_rows([("wer", vec![("a", 0.1), ("b", 0.4)])]).unwrap();
        assert_eq!(ranks(&aggregation.rank(&table).unwrap()), [("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_average_ranking() {
        let ranked = Aggregation::Average.rank(&mock_table()).unwrap();
        assert_eq!(ranks(&ranked), [("Sys1", 3), ("Sys2", 2), ("Sys3", 1)]);
    }

    #[test]
    fn test_contributing_metrics() {
        let table = mock_table();
        assert_eq!(Aggregation::Median.contributing_metrics(&table), ["mock_1", "mock_2", "mock_3"]);

        let weighted = Aggregation::WeightedMean {
            weights: WeightTable::new().with("mock_3", 1.0).with("mock_1", 2.0).with("bleu", 1.0),
        };
        assert_eq!(weighted.contributing_metrics(&table), ["mock_1", "mock_3"]);
    }

    #[test]
    fn test_aggregate_packages_results() {
        let run = EvaluationRun::new(["reference line"], mock_table())
            .with_output("Sys1", ["first"])
            .with_output("Sys3", ["third"]);

        let results = Aggregation::Average.aggregate(&run).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results.strategy(), StrategyKind::Average);
        assert_eq!(results.reference(), ["reference line"]);
        assert_eq!(results.contributing_metrics(), ["mock_1", "mock_2", "mock_3"]);

        let sys3 = results.get("Sys3").unwrap();
        assert_eq!(sys3.rank(), 1);
        assert_eq!(sys3.system_output(), ["third"]);
        assert_eq!(sys3.strategy_name(), "average");
        assert_eq!(sys3.strategy_title(), "Average");
        assert!((sys3.score() - 0.3).abs() < 1e-12);

        assert!(results.get("Sys2").unwrap().system_output().is_empty());
    }

    #[test]
    fn test_aggregate_propagates_precondition_errors() {
        let run = EvaluationRun::new(["ref"], mock_table());
        let pairwise = Aggregation::PairwiseComparison {
            polarities: MetricPolarities::new(),
        };
        assert!(pairwise.aggregate(&run).is_err());
    }
}
