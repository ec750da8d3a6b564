use super::{RankOrder, dense_ranks};
use crate::metrics::{MetricPolarities, ScoreTable};

/// Borda points of each system, in system order.
///
/// Every metric is a ballot. Systems are dense-ranked on each metric on its
/// own, in the metric's native direction, and a system ranked `r` out of `N`
/// earns `N - r` points from that ballot.
#[expect(clippy::cast_precision_loss, reason = "system counts are far below 2^52")]
pub fn borda_scores(table: &ScoreTable, polarities: &MetricPolarities) -> Vec<f64> {
    let candidates = table.systems().len() as f64;
    let mut points = vec![0.0; table.systems().len()];

    for (metric, values) in table.rows() {
        let order = if polarities.polarity_of(metric).lower_is_better() {
            RankOrder::Ascending
        } else {
            RankOrder::Descending
        };

        for (total, rank) in points.iter_mut().zip(dense_ranks(values, order)) {
            *total += candidates - f64::from(rank);
        }
    }

    points
}
