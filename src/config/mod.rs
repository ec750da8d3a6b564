//! Configuration documents
//!
//! The configuration classifies metric polarity, names weighting schemes and
//! picks a default strategy. It is read from `unimetrics.toml` (or `.yml`,
//! `.yaml`, `.json`) and falls back to the embedded `default_config.toml`.
//! Weighting schemes can also live in standalone `{metric: weight}` documents,
//! named after their file stem.

#[expect(clippy::module_inception, reason = "the config module holds the Config type")]
mod config;
mod documents;

pub use config::{CONFIG_FILE_NAMES, Config, DEFAULT_CONFIG_TOML, load_weighting_scheme, validate_weights};
pub use documents::{parse_document, read_document, write_document};
