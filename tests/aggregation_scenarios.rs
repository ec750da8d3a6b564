//! End-to-end checks of the aggregation strategies through the public API.

use std::collections::HashSet;
use strum::IntoEnumIterator;
use universal_metrics::inputs::EvaluationRun;
use universal_metrics::metrics::{MetricPolarities, Polarity, ScoreNormalizer, ScoreTable, WeightTable, normalize};
use universal_metrics::ranking::{Aggregation, MultipleUniversalMetricResult, RankOrder, StrategyKind, dense_ranks};

fn three_systems() -> EvaluationRun {
    let table = ScoreTable::from_metric_rows([
        ("mock_1", vec![("Sys1", 0.1), ("Sys2", 0.1), ("Sys3", 0.3)]),
        ("mock_2", vec![("Sys1", 0.1), ("Sys2", 0.2), ("Sys3", 0.3)]),
        ("mock_3", vec![("Sys1", 0.1), ("Sys2", 0.3), ("Sys3", 0.3)]),
    ])
    .unwrap();

    EvaluationRun::new(["the cat sat on the mat"], table)
        .with_output("Sys1", ["cat mat"])
        .with_output("Sys2", ["the cat sat"])
        .with_output("Sys3", ["the cat sat on the mat"])
}

fn score_of(results: &MultipleUniversalMetricResult, system: &str) -> f64 {
    results.get(system).unwrap().score()
}

fn rank_of(results: &MultipleUniversalMetricResult, system: &str) -> u32 {
    results.get(system).unwrap().rank()
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-12, "expected {expected}, got {actual}");
}

#[test]
fn average_ranks_by_mean_raw_score() {
    let results = Aggregation::Average.aggregate(&three_systems()).unwrap();

    assert_close(score_of(&results, "Sys1"), 0.1);
    assert_close(score_of(&results, "Sys2"), 0.2);
    assert_close(score_of(&results, "Sys3"), 0.3);

    assert_eq!(rank_of(&results, "Sys3"), 1);
    assert_eq!(rank_of(&results, "Sys2"), 2);
    assert_eq!(rank_of(&results, "Sys1"), 3);

    assert_eq!(results.get("Sys3").unwrap().system_output(), ["the cat sat on the mat"]);
    assert_eq!(results.reference(), ["the cat sat on the mat"]);
    assert_eq!(results.contributing_metrics(), ["mock_1", "mock_2", "mock_3"]);
}

#[test]
fn median_of_odd_count_is_middle_value() {
    let values = [0.1, 0.1, 0.1, -1.5, 1.0];
    let table = ScoreTable::from_metric_rows(
        values
            .iter()
            .enumerate()
            .map(|(i, value)| (format!("mock_{i}"), vec![("Sys1", *value), ("Sys2", 0.5)])),
    )
    .unwrap();

    let results = Aggregation::Median.aggregate(&EvaluationRun::new(["ref"], table)).unwrap();

    assert_eq!(score_of(&results, "Sys1").to_bits(), 0.1_f64.to_bits());
    assert_eq!(rank_of(&results, "Sys2"), 1);
    assert_eq!(rank_of(&results, "Sys1"), 2);
}

#[test]
fn weighted_sum_scales_normalized_scores() {
    let table = ScoreTable::from_metric_rows([
        ("mock_1", vec![("Sys1", 0.1), ("Sys2", 0.2), ("Sys3", 0.3)]),
        ("mock_2", vec![("Sys1", 0.1), ("Sys2", 0.2), ("Sys3", 0.3)]),
        ("mock_3", vec![("Sys1", 0.1), ("Sys2", 0.2), ("Sys3", 0.3)]),
    ])
    .unwrap();
    let weighted_sum = Aggregation::WeightedSum {
        weights: WeightTable::new().with("mock_1", 3.0).with("mock_2", 2.0).with("mock_3", 1.0),
        normalizer: ScoreNormalizer::new(MetricPolarities::new()),
    };

    let results = weighted_sum.aggregate(&EvaluationRun::new(["ref"], table)).unwrap();

    assert_close(score_of(&results, "Sys1"), 0.6);
    assert_close(score_of(&results, "Sys2"), 1.2);
    assert_close(score_of(&results, "Sys3"), 1.8);
    assert_eq!(rank_of(&results, "Sys3"), 1);
    assert_eq!(rank_of(&results, "Sys2"), 2);
    assert_eq!(rank_of(&results, "Sys1"), 3);
}

fn two_systems(order: [&str; 2]) -> EvaluationRun {
    let table = ScoreTable::from_metric_rows([
        ("bleu", vec![("A", 0.1), ("B", 0.3)]),
        ("chrf", vec![("A", 0.2), ("B", 0.4)]),
        ("ter", vec![("A", 0.5), ("B", 0.5)]),
        ("meteor", vec![("A", 0.1), ("B", 0.9)]),
        ("wer", vec![("A", 0.6), ("B", 0.2)]),
    ])
    .unwrap()
    .restrict_systems(&order)
    .unwrap();

    EvaluationRun::new(["ref"], table)
}

#[test]
fn pairwise_counts_wins_and_ignores_ties() {
    let pairwise = Aggregation::PairwiseComparison {
        polarities: MetricPolarities::new()
            .with("ter", Polarity::LowerIsBetter)
            .with("wer", Polarity::LowerIsBetter),
    };

    for order in [["A", "B"], ["B", "A"]] {
        let results = pairwise.aggregate(&two_systems(order)).unwrap();

        assert_eq!(score_of(&results, "A"), 0.0, "order {order:?}");
        assert_eq!(score_of(&results, "B"), 4.0, "order {order:?}");
        assert_eq!(rank_of(&results, "B"), 1, "order {order:?}");
        assert_eq!(rank_of(&results, "A"), 2, "order {order:?}");
    }
}

#[test]
fn pairwise_rejects_other_than_two_systems() {
    let pairwise = Aggregation::PairwiseComparison {
        polarities: MetricPolarities::new(),
    };
    assert!(pairwise.aggregate(&three_systems()).is_err());
}

#[test]
fn borda_winner_on_every_metric_takes_maximum_points() {
    let table = ScoreTable::from_metric_rows([
        ("bleu", vec![("X", 0.9), ("Y", 0.5), ("Z", 0.1)]),
        ("wer", vec![("X", 0.1), ("Y", 0.7), ("Z", 0.3)]),
    ])
    .unwrap();
    let borda = Aggregation::SocialChoiceTheory {
        polarities: MetricPolarities::new().with("wer", Polarity::LowerIsBetter),
    };

    let results = borda.aggregate(&EvaluationRun::new(["ref"], table)).unwrap();

    assert_eq!(score_of(&results, "X"), 4.0);
    assert_eq!(rank_of(&results, "X"), 1);
    assert!(results.iter().filter(|(system, _)| *system != "X").all(|(_, r)| r.rank() > 1));
}

#[test]
fn weighted_mean_rejects_zero_total_weight() {
    let weighted_mean = Aggregation::WeightedMean {
        weights: WeightTable::new().with("mock_1", 0.0).with("mock_2", 0.0),
    };
    assert!(weighted_mean.aggregate(&three_systems()).is_err());

    let unrelated = Aggregation::WeightedMean {
        weights: WeightTable::new().with("bleu", 1.0),
    };
    assert!(unrelated.aggregate(&three_systems()).is_err());
}

#[test]
fn every_strategy_is_deterministic() {
    let run = three_systems();
    let weights = WeightTable::new().with("mock_1", 3.0).with("mock_2", 2.0).with("mock_3", 1.0);
    let polarities = MetricPolarities::new().with("mock_2", Polarity::Bipolar);

    for kind in StrategyKind::iter().filter(|kind| *kind != StrategyKind::PairwiseComparison) {
        let aggregation = Aggregation::from_kind(kind, &polarities, Some(&weights)).unwrap();
        let first = aggregation.aggregate(&run).unwrap();
        let second = aggregation.aggregate(&run).unwrap();

        for ((system_a, a), (system_b, b)) in first.iter().zip(second.iter()) {
            assert_eq!(system_a, system_b);
            assert_eq!(a.rank(), b.rank(), "{kind}");
            assert_eq!(a.score().to_bits(), b.score().to_bits(), "{kind}");
        }
    }
}

#[test]
fn dense_ranks_have_no_gaps() {
    let scores = [0.5, 0.1, 0.5, 0.9, 0.1, 0.3, 0.9];
    let ranks = dense_ranks(&scores, RankOrder::Descending);

    let distinct_scores: HashSet<u64> = scores.iter().map(|s| s.to_bits()).collect();
    let distinct_ranks: HashSet<u32> = ranks.iter().copied().collect();
    assert_eq!(distinct_ranks.len(), distinct_scores.len());
    assert_eq!(distinct_ranks, (1..=4).collect::<HashSet<u32>>());

    for (i, a) in scores.iter().enumerate() {
        for (j, b) in scores.iter().enumerate() {
            assert_eq!(a == b, ranks[i] == ranks[j]);
        }
    }
}

#[test]
fn normalization_is_bounded() {
    let raws = [-10.0, -1.0, -0.5, 0.0, 0.25, 0.5, 1.0, 1.5, 42.0];
    for polarity in Polarity::iter() {
        for raw in raws {
            let normalized = normalize(polarity, raw);
            assert!((0.0..=1.0).contains(&normalized), "{polarity} {raw} -> {normalized}");
        }
    }
}

#[test]
fn results_are_shareable_across_threads() {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ScoreTable>();
    assert_send_sync::<Aggregation>();
    assert_send_sync::<EvaluationRun>();
    assert_send_sync::<MultipleUniversalMetricResult>();

    let run = three_systems();
    let handles: Vec<_> = [Aggregation::Average, Aggregation::Median]
        .into_iter()
        .map(|aggregation| {
            let run = run.clone();
            std::thread::spawn(move || aggregation.aggregate(&run))
        })
        .collect();

    for handle in handles {
        let results = handle.join().unwrap().unwrap();
        assert_eq!(results.ranked().next().map(|(system, _)| system), Some("Sys3"));
    }
}
