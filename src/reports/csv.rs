use crate::Result;
use crate::ranking::MultipleUniversalMetricResult;
use core::fmt::Write;
use ohno::{IntoAppError, app_err};

const HEADER: [&str; 6] = ["strategy", "title", "rank", "system", "score", "metrics"];

/// One row per strategy and system, systems in rank order.
///
/// Scores are written at full precision; contributing metrics are joined with `;`.
pub fn generate<W: Write>(results: &[MultipleUniversalMetricResult], writer: &mut W) -> Result<()> {
    let mut csv = ::csv::Writer::from_writer(Vec::new());
    csv.write_record(HEADER)?;

    for run in results {
        let metrics = run.contributing_metrics().join(";");
        for (system, result) in run.ranked() {
            let rank = result.rank().to_string();
            let score = result.score().to_string();
            csv.write_record([
                result.strategy_name(),
                result.strategy_title(),
                rank.as_str(),
                system,
                score.as_str(),
                metrics.as_str(),
            ])?;
        }
    }

    let bytes = csv.into_inner().map_err(|e| app_err!("finishing CSV report: {}", e.error()))?;
    let text = String::from_utf8(bytes).into_app_err("CSV report is not valid UTF-8")?;
    write!(writer, "{text}")?;
    Ok(())
}
