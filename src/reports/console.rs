use super::common;
use crate::Result;
use crate::ranking::MultipleUniversalMetricResult;
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(results: &[MultipleUniversalMetricResult], use_colors: bool, writer: &mut W) -> Result<()> {
    for (index, run) in results.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
            writeln!(writer, "═══════════════════════════════════════")?;
            writeln!(writer)?;
        }

        let title = run.strategy().title();
        if use_colors {
            writeln!(writer, "{}", title.bold())?;
        } else {
            writeln!(writer, "{title}")?;
        }
        writeln!(writer, "  metrics: {}", common::format_metrics(run.contributing_metrics()))?;
        writeln!(writer)?;

        let system_width = run.systems().map(str::len).max().unwrap_or(0).max("System".len());
        let scores: Vec<String> = run
            .ranked()
            .map(|(_, result)| common::format_score(run.strategy(), result.score()))
            .collect();
        let score_width = scores.iter().map(String::len).max().unwrap_or(0).max("Score".len());

        writeln!(writer, "  {:>4}  {:<system_width$}  {:>score_width$}", "Rank", "System", "Score")?;

        for ((system, result), score) in run.ranked().zip(&scores) {
            let rank = format!("{:>4}", result.rank());
            let rank = if use_colors && result.rank() == 1 {
                rank.green().bold().to_string()
            } else {
                rank
            };
            writeln!(writer, "  {rank}  {system:<system_width$}  {score:>score_width$}")?;
        }
    }

    Ok(())
}
