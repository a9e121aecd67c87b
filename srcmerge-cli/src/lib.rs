//! Library exports for srcmerge-cli.
//!
//! This module exports the CLI structure for use by benchmarks and tooling
//! that need the command definition without running it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
