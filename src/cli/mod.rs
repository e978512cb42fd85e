//! CLI command handlers

pub mod commands;

pub use commands::{run, screens, sheets, DriverOptions, RunSummary, Variant};
