//! Merge command implementation.
//!
//! This module implements the `merge` command, which amalgamates a root
//! header, its local includes and the paired implementation files into one
//! source file.

use crate::error::CliError;
use crate::utils::{extension_override, load_configuration, resolve_root, GlobalOptions};
use clap::Args;
use srcmerge::path::identity::same_file;
use srcmerge::{Config, Merger};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Merge a root header into a single translation unit.
#[derive(Args)]
pub struct MergeCommand {
    /// Root header to merge
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Write the merged source to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Implementation file extension, in priority order (repeatable)
    #[arg(long = "impl-ext", value_name = "EXT")]
    pub impl_ext: Vec<String>,

    /// Header extension used to pair a root implementation with its header
    #[arg(long = "header-ext", value_name = "EXT")]
    pub header_ext: Option<String>,

    /// Fail if the root header has no implementation file
    #[arg(long)]
    pub require_impl: bool,
}

impl MergeCommand {
    /// Execute the merge command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Resolve root and load configuration
        let root = resolve_root(&self.root)?;
        if let Some(ref path) = self.output {
            if same_file(path, &root) {
                return Err(CliError::InvalidArguments(format!(
                    "output file {} is the root header",
                    path.display()
                )));
            }
        }
        let overrides = Config {
            implementation_extensions: extension_override(&self.impl_ext),
            header_extension: self.header_ext,
            require_implementation: self.require_impl.then_some(true),
            ..Default::default()
        };
        let config = load_configuration(global, &root, overrides)?;

        // 2. Merge entirely in memory
        let output = Merger::new(config).merge(&root)?;
        let rendered = output.render();

        // 3. Write only once everything succeeded
        match self.output {
            Some(path) => {
                fs::write(&path, rendered.as_bytes())?;
                log::info!(
                    "wrote {} files into {}",
                    output.files.len(),
                    path.display()
                );
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(rendered.as_bytes())?;
                handle.flush()?;
            }
        }

        Ok(())
    }
}
