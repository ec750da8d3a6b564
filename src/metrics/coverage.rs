use super::MetricScore;
use std::collections::HashSet;

/// A metric that lacks scores for some of the systems seen in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    pub metric: String,
    pub missing_systems: Vec<String>,
}

/// Find metrics that do not cover every system.
///
/// This is the non-fatal counterpart of the check performed by
/// [`ScoreTable::from_scores`](super::ScoreTable::from_scores): callers use it
/// to show which scores are missing before the table is rejected. Metrics and
/// systems are reported in order of first appearance.
#[must_use]
pub fn coverage_gaps(scores: &[MetricScore]) -> Vec<CoverageGap> {
    let mut metrics: Vec<&str> = Vec::new();
    let mut systems: Vec<&str> = Vec::new();
    let mut present: HashSet<(&str, &str)> = HashSet::new();

    for score in scores {
        if !metrics.contains(&score.metric.as_str()) {
            metrics.push(score.metric.as_str());
        }
        if !systems.contains(&score.system.as_str()) {
            systems.push(score.system.as_str());
        }
        let _ = present.insert((score.metric.as_str(), score.system.as_str()));
    }

    metrics
        .into_iter()
        .filter_map(|metric| {
            let missing_systems: Vec<String> = systems
                .iter()
                .filter(|system| !present.contains(&(metric, **system)))
                .map(|system| (*system).to_string())
                .collect();

            (!missing_systems.is_empty()).then(|| CoverageGap {
                metric: metric.to_string(),
                missing_systems,
            })
        })
        .collect()
}
