//! Files command implementation.
//!
//! This module implements the `files` command, which runs a merge and prints
//! only the list of consumed files, in the order the manifest lists them.

use crate::error::CliError;
use crate::utils::{extension_override, load_configuration, resolve_root, GlobalOptions};
use clap::{Args, ValueEnum};
use srcmerge::output::FileListFormat;
use srcmerge::{Config, Merger};
use std::path::PathBuf;

/// List the files a merge would consume.
#[derive(Args)]
pub struct FilesCommand {
    /// Root header to inspect
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "human",
        env = "SRCMERGE_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Implementation file extension, in priority order (repeatable)
    #[arg(long = "impl-ext", value_name = "EXT")]
    pub impl_ext: Vec<String>,
}

/// Output format for the files command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One absolute path per line
    Human,
    /// JSON array of `{path, name, kind}` objects
    Json,
}

impl From<OutputFormat> for FileListFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => FileListFormat::Human,
            OutputFormat::Json => FileListFormat::Json,
        }
    }
}

impl FilesCommand {
    /// Execute the files command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let root = resolve_root(&self.root)?;
        let overrides = Config {
            implementation_extensions: extension_override(&self.impl_ext),
            ..Default::default()
        };
        let config = load_configuration(global, &root, overrides)?;

        let output = Merger::new(config).merge(&root)?;

        let formatter = FileListFormat::from(self.format).create_formatter();
        let text = formatter.format(&output.entries())?;
        println!("{text}");

        Ok(())
    }
}
