use super::MetricScore;
use crate::Result;
use ohno::app_err;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Raw scores of every system on every metric.
///
/// Metrics and systems keep the order in which they first appeared in the
/// input. Every metric covers exactly the same set of systems, and no score is
/// NaN; both are checked when the table is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    metrics: Vec<String>,
    systems: Vec<String>,

    // values[metric][system]
    values: Vec<Vec<f64>>,
}

impl ScoreTable {
    /// Build a table from individual scores.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no scores, if a score is NaN, if the same
    /// `(metric, system)` pair is scored twice, or if some metric does not
    /// cover every system that appears anywhere in the input.
    pub fn from_scores<I>(scores: I) -> Result<Self>
    where
        I: IntoIterator<Item = MetricScore>,
    {
        let mut metrics: Vec<String> = Vec::new();
        let mut systems: Vec<String> = Vec::new();
        let mut metric_index: HashMap<String, usize> = HashMap::new();
        let mut system_index: HashMap<String, usize> = HashMap::new();
        let mut cells: Vec<Vec<Option<f64>>> = Vec::new();

        for score in scores {
            if score.value.is_nan() {
                return Err(app_err!(
                    "score of system '{}' on metric '{}' is NaN",
                    score.system,
                    score.metric
                ));
            }

            let m = match metric_index.entry(score.metric) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    metrics.push(entry.key().clone());
                    cells.push(vec![None; systems.len()]);
                    *entry.insert(metrics.len() - 1)
                }
            };

            let s = match system_index.entry(score.system) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    systems.push(entry.key().clone());
                    for row in &mut cells {
                        row.push(None);
                    }
                    *entry.insert(systems.len() - 1)
                }
            };

            let cell = &mut cells[m][s];
            if cell.is_some() {
                return Err(app_err!(
                    "system '{}' is scored more than once on metric '{}'",
                    systems[s],
                    metrics[m]
                ));
            }
            *cell = Some(score.value);
        }

        if metrics.is_empty() {
            return Err(app_err!("score table contains no scores"));
        }

        let mut values = Vec::with_capacity(metrics.len());
        for (metric, row) in metrics.iter().zip(cells) {
            let missing: Vec<&str> = row
                .iter()
                .zip(&systems)
                .filter(|(value, _)| value.is_none())
                .map(|(_, system)| system.as_str())
                .collect();

            if !missing.is_empty() {
                return Err(app_err!(
                    "metric '{metric}' has no score for system(s) {}; every metric must cover the same systems",
                    missing.join(", ")
                ));
            }

            values.push(row.into_iter().flatten().collect());
        }

        Ok(Self { metrics, systems, values })
    }

    /// Build a table from `(metric, [(system, score)])` rows.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ScoreTable::from_scores`].
    pub fn from_metric_rows<I, M, R, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (M, R)>,
        M: Into<String>,
        R: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut scores = Vec::new();
        for (metric, row) in rows {
            let metric = metric.into();
            scores.extend(row.into_iter().map(|(system, value)| MetricScore::new(metric.clone(), system, value)));
        }

        Self::from_scores(scores)
    }

    #[must_use]
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    #[must_use]
    pub fn systems(&self) -> &[String] {
        &self.systems
    }

    /// Scores of every system on the metric at `metric_index`, in system order.
    #[must_use]
    pub fn metric_values(&self, metric_index: usize) -> &[f64] {
        &self.values[metric_index]
    }

    /// Scores of the system at `system_index` on every metric, in metric order.
    pub fn system_values(&self, system_index: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(move |row| row[system_index])
    }

    /// Iterate `(metric, scores in system order)`.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.metrics.iter().map(String::as_str).zip(self.values.iter().map(Vec::as_slice))
    }

    #[must_use]
    pub fn score(&self, metric: &str, system: &str) -> Option<f64> {
        let m = self.metrics.iter().position(|name| name == metric)?;
        let s = self.systems.iter().position(|name| name == system)?;
        Some(self.values[m][s])
    }

    /// A table limited to the given systems, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if no systems are requested, if a system is unknown,
    /// or if a system is requested twice.
    pub fn restrict_systems<S: AsRef<str>>(&self, systems: &[S]) -> Result<Self> {
        if systems.is_empty() {
            return Err(app_err!("at least one system must be selected"));
        }

        let indices = select_indices(&self.systems, systems, "system")?;
        let values = self
            .values
            .iter()
            .map(|row| indices.iter().map(|&s| row[s]).collect())
            .collect();

        Ok(Self {
            metrics: self.metrics.clone(),
            systems: indices.iter().map(|&s| self.systems[s].clone()).collect(),
            values,
        })
    }

    /// A table limited to the given metrics, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric is unknown or requested twice.
    pub fn restrict_metrics<S: AsRef<str>>(&self, metrics: &[S]) -> Result<Self> {
        let indices = select_indices(&self.metrics, metrics, "metric")?;

        Ok(Self {
            metrics: indices.iter().map(|&m| self.metrics[m].clone()).collect(),
            systems: self.systems.clone(),
            values: indices.iter().map(|&m| self.values[m].clone()).collect(),
        })
    }
}

fn select_indices<S: AsRef<str>>(available: &[String], requested: &[S], what: &str) -> Result<Vec<usize>> {
    let mut indices: Vec<usize> = Vec::with_capacity(requested.len());
    for name in requested {
        let name = name.as_ref();
        let index = available
            .iter()
            .position(|candidate| candidate == name)
            .ok_or_else(|| app_err!("unknown {what} '{name}'; available: {}", available.join(", ")))?;

        if indices.contains(&index) {
            return Err(app_err!("{what} '{name}' is selected more than once"));
        }
        indices.push(index);
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoreTable {
        ScoreTable::from_metric_rows([
            ("bleu", vec![("a", 0.1), ("b", 0.2), ("c", 0.3)]),
            ("ter", vec![("a", 0.7), ("b", 0.5), ("c", 0.6)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_order_of_first_appearance() {
        let table = ScoreTable::from_scores([
            MetricScore::new("rouge", "sys2", 0.4),
            MetricScore::new("rouge", "sys1", 0.3),
            MetricScore::new("bleu", "sys1", 0.2),
            MetricScore::new("bleu", "sys2", 0.1),
        ])
        .unwrap();

        assert_eq!(table.metrics(), ["rouge", "bleu"]);
        assert_eq!(table.systems(), ["sys2", "sys1"]);
        assert_eq!(table.metric_values(1), [0.1, 0.2]);
        assert_eq!(table.system_values(1).collect::<Vec<_>>(), [0.3, 0.2]);
    }

    #[test]
    fn test_score_lookup() {
        let table = sample();
        assert_eq!(table.score("ter", "b"), Some(0.5));
        assert_eq!(table.score("ter", "z"), None);
        assert_eq!(table.score("chrf", "a"), None);
    }

    #[test]
    fn test_inconsistent_systems_rejected() {
        let err = ScoreTable::from_metric_rows([
            ("bleu", vec![("a", 0.1), ("b", 0.2)]),
            ("ter", vec![("a", 0.7)]),
        ])
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("ter"), "{message}");
        assert!(message.contains('b'), "{message}");
    }

    #[test]
    fn test_system_missing_from_earlier_metric_rejected() {
        let result = ScoreTable::from_metric_rows([
            ("bleu", vec![("a", 0.1)]),
            ("ter", vec![("a", 0.7), ("b", 0.2)]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_score_rejected() {
        let result = ScoreTable::from_scores([MetricScore::new("bleu", "a", 0.1), MetricScore::new("bleu", "a", 0.2)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let result = ScoreTable::from_scores([MetricScore::new("bleu", "a", f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_rejected() {
        let result = ScoreTable::from_scores(Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_restrict_systems_follows_requested_order() {
        let table = sample().restrict_systems(&["c", "a"]).unwrap();
        assert_eq!(table.systems(), ["c", "a"]);
        assert_eq!(table.metric_values(0), [0.3, 0.1]);
        assert_eq!(table.metric_values(1), [0.6, 0.7]);
    }

    #[test]
    fn test_restrict_systems_errors() {
        let table = sample();
        assert!(table.restrict_systems::<&str>(&[]).is_err());
        assert!(table.restrict_systems(&["a", "x"]).is_err());
        assert!(table.restrict_systems(&["a", "a"]).is_err());
    }

    #[test]
    fn test_restrict_metrics() {
        let table = sample().restrict_metrics(&["ter"]).unwrap();
        assert_eq!(table.metrics(), ["ter"]);
        assert_eq!(table.systems(), ["a", "b", "c"]);
        assert!(sample().restrict_metrics(&["chrf"]).is_err());

        let none = sample().restrict_metrics::<&str>(&[]).unwrap();
        assert!(none.metrics().is_empty());
        assert_eq!(none.systems().len(), 3);
    }

    #[test]
    fn test_rows() {
        let table = sample();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0], ("bleu", &[0.1, 0.2, 0.3][..]));
        assert_eq!(rows[1].0, "ter");
    }
}
