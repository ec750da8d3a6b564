//! Common utilities shared across report generators.

use crate::ranking::StrategyKind;

/// Format an aggregated score for display.
///
/// Pairwise wins and Borda points are whole numbers and shown without decimals.
pub fn format_score(strategy: StrategyKind, score: f64) -> String {
    match strategy {
        StrategyKind::PairwiseComparison | StrategyKind::SocialChoiceTheory => format!("{score:.0}"),
        _ => format!("{score:.4}"),
    }
}

/// Format a list of metric names as a comma-separated string.
pub fn format_metrics(metrics: &[String]) -> String {
    if metrics.is_empty() {
        "(none)".to_string()
    } else {
        metrics.join(", ")
    }
}
