use crate::Result;
use crate::metrics::{ScoreNormalizer, ScoreTable, WeightTable};
use ohno::app_err;

/// Indices and weights of the table metrics mentioned by the weighting scheme, in table order.
///
/// Weights for metrics that are not in the table are ignored.
pub fn weighted_metrics(table: &ScoreTable, weights: &WeightTable) -> Vec<(usize, f64)> {
    for (metric, _) in weights.iter() {
        if !table.metrics().iter().any(|m| m == metric) {
            log::debug!("ignoring weight for metric '{metric}', which has no scores");
        }
    }

    table
        .metrics()
        .iter()
        .enumerate()
        .filter_map(|(index, metric)| weights.weight_of(metric).map(|weight| (index, weight)))
        .collect()
}

/// `Σ w·raw / Σ w` for each system, in system order.
///
/// # Errors
///
/// Returns an error if the applicable weights add up to zero or to a non-finite value.
pub fn weighted_mean_scores(table: &ScoreTable, weights: &WeightTable) -> Result<Vec<f64>> {
    let applicable = weighted_metrics(table, weights);
    let total: f64 = applicable.iter().map(|(_, weight)| weight).sum();

    if total == 0.0 || !total.is_finite() {
        return Err(app_err!(
            "weighted mean requires a non-zero, finite total weight over the scored metrics (got {total})"
        ));
    }

    Ok(weighted_totals(table, &applicable, |_, raw| raw)
        .into_iter()
        .map(|sum| sum / total)
        .collect())
}

/// `Σ w·normalize(raw)` for each system, in system order.
///
/// Metrics without a weight contribute nothing, and a zero total weight is
/// not an error.
pub fn weighted_sum_scores(table: &ScoreTable, weights: &WeightTable, normalizer: &ScoreNormalizer) -> Vec<f64> {
    let applicable = weighted_metrics(table, weights);
    weighted_totals(table, &applicable, |metric, raw| normalizer.normalize(metric, raw))
}

fn weighted_totals(table: &ScoreTable, applicable: &[(usize, f64)], value: impl Fn(&str, f64) -> f64) -> Vec<f64> {
    let mut totals = vec![0.0; table.systems().len()];

    for &(m, weight) in applicable {
        let metric = table.metrics()[m].as_str();
        for (total, &raw) in totals.iter_mut().zip(table.metric_values(m)) {
            *total += weight * value(metric, raw);
        }
    }

    totals
}
