//! Utility functions for CLI operations.
//!
//! Path resolution for the root header and configuration loading shared by
//! the `merge` and `files` commands.

use crate::error::CliError;
use srcmerge::path::normalize::{expand_tilde, normalize_from_cwd};
use srcmerge::{Config, ConfigBuilder};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Resolve the root header argument to an absolute, lexically clean path.
///
/// A leading `~` names the home directory, as it would in a shell. The file
/// is not required to exist here; the merge reports that itself.
pub fn resolve_root(root: &Path) -> Result<PathBuf, CliError> {
    let expanded = expand_tilde(root)?;
    normalize_from_cwd(&expanded).map_err(CliError::from)
}

/// Load hierarchical configuration for a merge rooted at `root`.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The nearest `srcmerge.yaml` above the root header
/// 5. The user configuration file
/// 6. Built-in defaults (lowest priority)
pub fn load_configuration(
    global: &GlobalOptions,
    root: &Path,
    overrides: Config,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);

    if let Some(dir) = root.parent() {
        builder = builder.with_working_dir(dir);
    }
    if let Some(ref file) = global.config {
        builder = builder.with_config_file(file);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build configuration overrides from repeated `--impl-ext` values.
///
/// An empty list means "not given" so lower layers still apply.
pub fn extension_override(extensions: &[String]) -> Option<Vec<String>> {
    if extensions.is_empty() {
        None
    } else {
        Some(extensions.to_vec())
    }
}
