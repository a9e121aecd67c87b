//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, FilesCommand, MergeCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Merge a C header and its local includes into a single source file.
#[derive(Parser)]
#[command(name = "srcmerge")]
#[command(
    version,
    about = "Merge a C header and its local includes into one file",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file in addition to discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "SRCMERGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Merge a root header into a single translation unit
    Merge(MergeCommand),

    /// List the files a merge would consume
    Files(FilesCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
