use crate::Result;
use crate::metrics::{MetricPolarities, ScoreTable};
use core::cmp::Ordering;
use ohno::app_err;

/// Per-metric win counts of a head-to-head comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairwiseOutcome {
    /// Metrics on which the first system is strictly better.
    pub first_wins: usize,

    /// Metrics on which the second system is strictly better.
    pub second_wins: usize,

    /// Metrics on which both systems score exactly the same.
    pub ties: usize,
}

impl PairwiseOutcome {
    /// Compare the two systems of `table` metric by metric.
    ///
    /// Each metric is judged in its native direction: smaller raw scores win
    /// on lower-is-better metrics, larger raw scores win otherwise. A tie
    /// counts for neither system, so the second system's wins are the metrics
    /// left after the first system's wins and the ties.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table holds exactly two systems.
    pub fn compare(table: &ScoreTable, polarities: &MetricPolarities) -> Result<Self> {
        let systems = table.systems();
        if systems.len() != 2 {
            return Err(app_err!(
                "pairwise comparison requires exactly two systems, got {}",
                systems.len()
            ));
        }

        let mut first_wins = 0;
        let mut ties = 0;

        for (metric, values) in table.rows() {
            let (first, second) = (values[0], values[1]);
            let ordering = if polarities.polarity_of(metric).lower_is_better() {
                second.total_cmp(&first)
            } else {
                first.total_cmp(&second)
            };

            #[expect(clippy::float_cmp, reason = "ties are exact")]
            let tied = first == second;

            if tied {
                ties += 1;
            } else if ordering == Ordering::Greater {
                first_wins += 1;
            }
        }

        let outcome = Self {
            first_wins,
            second_wins: table.metrics().len() - first_wins - ties,
            ties,
        };

        log::debug!(
            "pairwise comparison of '{}' and '{}': {} / {} wins, {} tie(s)",
            systems[0],
            systems[1],
            outcome.first_wins,
            outcome.second_wins,
            outcome.ties
        );

        Ok(outcome)
    }

    /// Win counts as scores, in the table's system order.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "metric counts are far below 2^52")]
    pub fn scores(self) -> Vec<f64> {
        vec![self.first_wins as f64, self.second_wins as f64]
    }
}
