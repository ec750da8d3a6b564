//! Report generation for aggregation results
//!
//! This module renders ranked results for people and for other programs.
//!
//! # Implementation Model
//!
//! Three report generators are provided, each accessed through a `generate` function:
//! - **Console**: Terminal tables with optional ANSI colors
//! - **CSV**: One row per strategy and system
//! - **JSON**: Machine-readable structured data
//!
//! All generators operate on the same input: a slice of
//! [`MultipleUniversalMetricResult`](crate::ranking::MultipleUniversalMetricResult),
//! one per strategy that was run, and write into a `core::fmt::Write`. Systems
//! always appear in rank order.

mod common;
mod console;
mod csv;
mod json;

pub use self::console::generate as generate_console;
pub use self::csv::generate as generate_csv;
pub use self::json::generate as generate_json;
