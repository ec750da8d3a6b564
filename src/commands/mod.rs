//! Command-line interface and orchestration for universal-metrics
//!
//! This module implements the CLI commands and wires the score documents,
//! configuration, aggregation engine and report generators together.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **rank**: Load a score document, run one or more aggregation strategies
//!   over it, and render the rankings to the console, CSV or JSON
//! - **init**: Generate a default configuration file with the polarity
//!   classification and a few weighting schemes
//! - **validate**: Check a configuration file, and optionally a score document
//!   and a standalone weighting scheme
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. All output goes through a [`Host`],
//! so commands can be driven from tests without touching the real terminal.
//!
//! The `common` module provides shared functionality like logging setup,
//! color mode handling and warning output.

mod common;
mod host;
mod init;
mod rank;
mod run;
mod validate;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use rank::{RankArgs, process_rank};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
