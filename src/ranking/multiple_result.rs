use super::{StrategyKind, UniversalMetricResult};
use crate::Result;
use ohno::app_err;

/// The results of one aggregation run, one per system.
///
/// Construction guarantees that every member describes the same run: the same
/// reference, the same contributing metrics and the same strategy. Systems
/// keep the order in which they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleUniversalMetricResult {
    results: Vec<(String, UniversalMetricResult)>,
}

impl MultipleUniversalMetricResult {
    /// Group per-system results into one run.
    ///
    /// # Errors
    ///
    /// Returns an error if `results` is empty, if a system appears twice, or
    /// if the results disagree on reference, contributing metrics or strategy.
    pub fn new(results: Vec<(String, UniversalMetricResult)>) -> Result<Self> {
        let Some((first_system, first)) = results.first() else {
            return Err(app_err!("an aggregation run must contain at least one system"));
        };

        for (index, (system, result)) in results.iter().enumerate() {
            if results[..index].iter().any(|(earlier, _)| earlier == system) {
                return Err(app_err!("system '{system}' appears more than once in the aggregation run"));
            }

            if result.reference() != first.reference() {
                return Err(app_err!(
                    "results for '{system}' and '{first_system}' were computed against different references"
                ));
            }

            if result.contributing_metrics() != first.contributing_metrics() {
                return Err(app_err!(
                    "results for '{system}' and '{first_system}' were computed over different metrics ([{}] vs [{}])",
                    result.contributing_metrics().join(", "),
                    first.contributing_metrics().join(", ")
                ));
            }

            if result.strategy() != first.strategy() {
                return Err(app_err!(
                    "results for '{system}' and '{first_system}' were produced by different strategies ({} vs {})",
                    result.strategy(),
                    first.strategy()
                ));
            }
        }

        Ok(Self { results })
    }

    #[must_use]
    pub fn get(&self, system: &str) -> Option<&UniversalMetricResult> {
        self.results.iter().find(|(name, _)| name == system).map(|(_, result)| result)
    }

    /// Iterate `(system, result)` in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniversalMetricResult)> {
        self.results.iter().map(|(name, result)| (name.as_str(), result))
    }

    /// Iterate `(system, result)` by rank; systems sharing a rank keep input order.
    pub fn ranked(&self) -> impl Iterator<Item = (&str, &UniversalMetricResult)> {
        let mut ordered: Vec<_> = self.iter().collect();
        ordered.sort_by_key(|(_, result)| result.rank());
        ordered.into_iter()
    }

    pub fn systems(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn reference(&self) -> &[String] {
        self.results[0].1.reference()
    }

    #[must_use]
    pub fn contributing_metrics(&self) -> &[String] {
        self.results[0].1.contributing_metrics()
    }

    #[must_use]
    pub fn strategy(&self) -> StrategyKind {
        self.results[0].1.strategy()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// A constructed run always holds at least one system.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
