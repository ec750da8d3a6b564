use crate::Result;
use crate::metrics::ScoreTable;
use ohno::app_err;

/// Arithmetic mean of each system's raw scores, in system order.
///
/// Scores are not normalized, so every metric participates on its native scale.
#[expect(clippy::cast_precision_loss, reason = "metric counts are far below 2^52")]
pub fn average_scores(table: &ScoreTable) -> Result<Vec<f64>> {
    let count = table.metrics().len();
    if count == 0 {
        return Err(app_err!("average requires at least one metric"));
    }

    Ok((0..table.systems().len())
        .map(|s| table.system_values(s).sum::<f64>() / count as f64)
        .collect())
}
