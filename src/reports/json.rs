use crate::Result;
use crate::ranking::MultipleUniversalMetricResult;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(results: &[MultipleUniversalMetricResult], writer: &mut W) -> Result<()> {
    let runs: Vec<_> = results
        .iter()
        .map(|run| {
            let systems: Vec<_> = run
                .ranked()
                .map(|(system, result)| {
                    json!({
                        "system": system,
                        "rank": result.rank(),
                        "score": result.score(),
                    })
                })
                .collect();

            json!({
                "strategy": run.strategy().name(),
                "title": run.strategy().title(),
                "metrics": run.contributing_metrics(),
                "systems": systems,
            })
        })
        .collect();

    let output = json!({
        "results": runs
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
