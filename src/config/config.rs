use super::documents::{parse_document, read_document, write_document};
use crate::Result;
use crate::metrics::{MetricPolarities, WeightTable};
use crate::ranking::StrategyKind;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File names searched for when no configuration path is given, in order.
pub const CONFIG_FILE_NAMES: [&str; 4] = ["unimetrics.toml", "unimetrics.yml", "unimetrics.yaml", "unimetrics.json"];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Strategy used when none is requested on the command line
    #[serde(default)]
    pub default_strategy: StrategyKind,

    /// How each metric's native scale relates to quality; unlisted metrics are higher-is-better
    #[serde(default)]
    pub metric_polarity: MetricPolarities,

    /// Named weighting schemes for the weighted strategies
    #[serde(default)]
    pub weighting_schemes: BTreeMap<String, WeightTable>,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, the first of [`CONFIG_FILE_NAMES`] found in
    /// `base_dir` is used, and the embedded defaults if there is none.
    /// Returns the configuration together with validation warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it holds a non-finite weight
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let mut found = None;
            for name in CONFIG_FILE_NAMES {
                let path = base_dir.join(name);
                match fs::read_to_string(&path) {
                    Ok(text) => {
                        found = Some((path, text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration from {path}")),
                }
            }

            let Some(result) = found else {
                log::debug!("no configuration file in '{base_dir}', using defaults");
                let config = Self::default();
                let warnings = config.validate()?;
                return Ok((config, warnings));
            };
            result
        };

        log::info!("loading configuration from '{final_path}'");
        let config: Self = parse_document(&final_path, &text)?;
        let warnings = config.validate()?;
        Ok((config, warnings))
    }

    /// Save configuration to a file, in the format given by its extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        write_document(output_path, self)
    }

    /// Save the default configuration
    ///
    /// TOML output is the commented default file verbatim; other formats are serialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        if output_path.extension() == Some("toml") {
            fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
            Ok(())
        } else {
            Self::default().save(output_path)
        }
    }

    /// Look up a weighting scheme by name
    ///
    /// # Errors
    ///
    /// Returns an error naming the known schemes if there is no such scheme
    pub fn weighting_scheme(&self, name: &str) -> Result<&WeightTable> {
        self.weighting_schemes.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.weighting_schemes.keys().map(String::as_str).collect();
            app_err!("unknown weighting scheme '{name}'; configured schemes: {}", known.join(", "))
        })
    }

    /// Check weighting schemes, returning warnings for schemes that are legal but suspicious
    ///
    /// # Errors
    ///
    /// Returns an error if a weight is NaN or infinite
    pub fn validate(&self) -> Result<Vec<String>> {
        let mut warnings = Vec::new();

        for (name, weights) in &self.weighting_schemes {
            warnings.extend(validate_weights(name, weights)?);
        }

        if self.default_strategy.is_weighted() && self.weighting_schemes.is_empty() {
            warnings.push(format!(
                "default strategy '{}' needs a weighting scheme, but none are configured",
                self.default_strategy
            ));
        }

        Ok(warnings)
    }
}

/// Check one weighting scheme
///
/// # Errors
///
/// Returns an error if a weight is NaN or infinite
pub fn validate_weights(name: &str, weights: &WeightTable) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    if let Some((metric, weight)) = weights.iter().find(|(_, weight)| !weight.is_finite()) {
        return Err(app_err!("weighting scheme '{name}' gives metric '{metric}' the non-finite weight {weight}"));
    }

    if weights.is_empty() {
        warnings.push(format!("weighting scheme '{name}' has no weights"));
    } else if weights.iter().all(|(_, weight)| weight == 0.0) {
        warnings.push(format!(
            "all weights of weighting scheme '{name}' are zero; it cannot be used with the weighted mean"
        ));
    }

    for (metric, weight) in weights.iter().filter(|(_, weight)| *weight < 0.0) {
        warnings.push(format!("weighting scheme '{name}' gives metric '{metric}' the negative weight {weight}"));
    }

    Ok(warnings)
}

/// Load a standalone weighting scheme document (`{metric: weight}`), named after its file stem
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if it holds a non-finite weight
pub fn load_weighting_scheme(path: &Utf8Path) -> Result<(String, WeightTable, Vec<String>)> {
    let name = path
        .file_stem()
        .ok_or_else(|| app_err!("cannot derive a weighting scheme name from '{path}'"))?
        .to_string();

    let weights: WeightTable = read_document(path)?;
    let warnings = validate_weights(&name, &weights)?;

    log::info!("loaded weighting scheme '{name}' with {} weight(s) from '{path}'", weights.len());
    Ok((name, weights, warnings))
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
