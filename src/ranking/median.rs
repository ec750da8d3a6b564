use crate::Result;
use crate::metrics::ScoreTable;
use ohno::app_err;

/// Median of each system's raw scores, in system order.
///
/// An even number of metrics yields the mean of the two middle values.
pub fn median_scores(table: &ScoreTable) -> Result<Vec<f64>> {
    if table.metrics().is_empty() {
        return Err(app_err!("median requires at least one metric"));
    }

    Ok((0..table.systems().len())
        .map(|s| {
            let mut values: Vec<f64> = table.system_values(s).collect();
            values.sort_by(f64::total_cmp);
            median_of_sorted(&values)
        })
        .collect())
}

fn median_of_sorted(values: &[f64]) -> f64 {
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        f64::midpoint(values[mid - 1], values[mid])
    } else {
        values[mid]
    }
}
