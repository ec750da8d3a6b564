use super::Host;
use super::common::print_warnings;
use crate::Result;
use crate::config::{Config, load_weighting_scheme};
use crate::inputs::ScoreDocument;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::app_err;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is one of `unimetrics.[toml|yml|yaml|json]`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Also check a score document
    #[arg(long, short = 's', value_name = "PATH")]
    pub scores: Option<Utf8PathBuf>,

    /// Also check a standalone weighting scheme document
    #[arg(long, value_name = "PATH")]
    pub weights_file: Option<Utf8PathBuf>,
}

/// Loads every document named on the command line, returning the warnings found along the way
fn validate_inner(args: &ValidateArgs) -> Result<Vec<String>> {
    let (_, mut warnings) = Config::load(Utf8Path::new("."), args.config.as_ref())?;

    if let Some(path) = &args.weights_file {
        let (_, _, scheme_warnings) = load_weighting_scheme(path)?;
        warnings.extend(scheme_warnings);
    }

    if let Some(path) = &args.scores {
        let document = ScoreDocument::load(path)?;
        if let Some(gap) = document.coverage_gaps().first() {
            return Err(app_err!(
                "metric '{}' in '{path}' has no score for {}",
                gap.metric,
                gap.missing_systems.join(", ")
            ));
        }

        let run = document.into_run()?;
        let table = run.scores();
        if table.metrics().is_empty() {
            warnings.push(format!("score document '{path}' holds no scores"));
        } else if table.systems().len() != 2 {
            warnings.push(format!(
                "score document '{path}' scores {} system(s); pairwise comparison needs exactly two",
                table.systems().len()
            ));
        }
    }

    Ok(warnings)
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    match validate_inner(args) {
        Ok(warnings) => {
            let _ = writeln!(host.output(), "Validation successful");
            if let Some(path) = &args.config {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using configuration from the current directory or the built-in defaults");
            }
            if let Some(path) = &args.scores {
                let _ = writeln!(host.output(), "Score document: {path}");
            }

            print_warnings(host, "Validation warnings", &warnings);
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
