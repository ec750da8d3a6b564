use super::Host;
use super::common::{ColorMode, LogLevel, init_logging, print_warnings};
use crate::Result;
use crate::config::{Config, load_weighting_scheme};
use crate::inputs::{EvaluationRun, ScoreDocument};
use crate::metrics::WeightTable;
use crate::ranking::{Aggregation, MultipleUniversalMetricResult, StrategyKind};
use crate::reports::{generate_console, generate_csv, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Score document to rank (TOML, YAML or JSON)
    #[arg(long, short = 's', value_name = "PATH")]
    pub scores: Utf8PathBuf,

    /// Aggregation strategies to run, in order (default is the configured default strategy)
    #[arg(long, value_name = "STRATEGY", value_delimiter = ',')]
    pub strategy: Vec<StrategyKind>,

    /// Name of a weighting scheme from the configuration, for the weighted strategies
    #[arg(long, value_name = "NAME", conflicts_with = "weights_file")]
    pub weights: Option<String>,

    /// Standalone weighting scheme document (`{metric: weight}`), for the weighted strategies
    #[arg(long, value_name = "PATH")]
    pub weights_file: Option<Utf8PathBuf>,

    /// Only rank these systems, in this order
    #[arg(long, value_name = "SYSTEMS", value_delimiter = ',')]
    pub systems: Option<Vec<String>>,

    /// Only aggregate over these metrics
    #[arg(long, value_name = "METRICS", value_delimiter = ',')]
    pub metrics: Option<Vec<String>>,

    /// Path to configuration file (default is one of `unimetrics.[toml|yml|yaml|json]`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Show the rankings on the console even when writing report files
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Write the rankings to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Write the rankings to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

pub fn process_rank<H: Host>(host: &mut H, args: &RankArgs) -> Result<()> {
    init_logging(args.log_level);

    let (config, warnings) = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    print_warnings(host, "Configuration validation warnings", &warnings);

    let run = load_run(host, args)?;
    let weights = select_weights(host, args, &config)?;

    let strategies = if args.strategy.is_empty() {
        vec![config.default_strategy]
    } else {
        args.strategy.clone()
    };

    let results = strategies
        .into_iter()
        .map(|kind| Aggregation::from_kind(kind, &config.metric_polarity, weights.as_ref())?.aggregate(&run))
        .collect::<Result<Vec<_>>>()?;

    report(host, args, &results)
}

fn load_run<H: Host>(host: &mut H, args: &RankArgs) -> Result<EvaluationRun> {
    let document = ScoreDocument::load(&args.scores)?;

    let gaps: Vec<String> = document
        .coverage_gaps()
        .into_iter()
        .map(|gap| format!("metric '{}' has no score for {}", gap.metric, gap.missing_systems.join(", ")))
        .collect();
    print_warnings(host, "Incomplete scores", &gaps);

    let mut run = document.into_run()?;

    if let Some(systems) = &args.systems {
        run = run.with_scores(run.scores().restrict_systems(systems)?);
    }

    if let Some(metrics) = &args.metrics {
        run = run.with_scores(run.scores().restrict_metrics(metrics)?);
    }

    Ok(run)
}

fn select_weights<H: Host>(host: &mut H, args: &RankArgs, config: &Config) -> Result<Option<WeightTable>> {
    if let Some(path) = &args.weights_file {
        let (name, weights, warnings) = load_weighting_scheme(path)?;
        print_warnings(host, &format!("Weighting scheme '{name}' warnings"), &warnings);
        return Ok(Some(weights));
    }

    args.weights
        .as_deref()
        .map(|name| config.weighting_scheme(name).cloned())
        .transpose()
}

fn report<H: Host>(host: &mut H, args: &RankArgs, results: &[MultipleUniversalMetricResult]) -> Result<()> {
    let writing_files = args.csv.is_some() || args.json.is_some();

    if args.console || !writing_files {
        let mut console_output = String::new();
        generate_console(results, args.color.use_colors(), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    if let Some(filename) = &args.csv {
        let mut csv_output = String::new();
        generate_csv(results, &mut csv_output)?;
        fs::write(filename, csv_output).into_app_err_with(|| format!("writing CSV report to {filename}"))?;
    }

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(results, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to {filename}"))?;
    }

    Ok(())
}
