//! Configuration schema definitions.
//!
//! This module defines the configuration structure for srcmerge. Every field
//! is optional so that partial files can be layered; the `effective_*`
//! accessors fall back to the built-in defaults.

use serde::{Deserialize, Serialize};

/// Implementation extensions tried when pairing a header, in priority order.
pub const DEFAULT_IMPLEMENTATION_EXTENSIONS: &[&str] = &[".c"];

/// Extension a root implementation's own header carries.
pub const DEFAULT_HEADER_EXTENSION: &str = ".h";

/// Directive line stripped from every merged file.
pub const DEFAULT_ONCE_GUARD: &str = "#pragma once";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use srcmerge::config::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "implementation_extensions: [\".c\", \".cc\"]\nrequire_implementation: true\n",
/// )
/// .unwrap();
/// assert_eq!(config.effective_implementation_extensions(), vec![".c", ".cc"]);
/// assert!(config.effective_require_implementation());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Implementation file extensions, in priority order.
    pub implementation_extensions: Option<Vec<String>>,

    /// Header extension used to pair a root implementation with its header.
    pub header_extension: Option<String>,

    /// Two-token directive stripped from merged output.
    pub once_guard: Option<String>,

    /// Fail when the root header has no implementation file.
    pub require_implementation: Option<bool>,
}

impl Config {
    /// A configuration with every field set to its built-in default.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            implementation_extensions: Some(
                DEFAULT_IMPLEMENTATION_EXTENSIONS
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ),
            header_extension: Some(DEFAULT_HEADER_EXTENSION.to_string()),
            once_guard: Some(DEFAULT_ONCE_GUARD.to_string()),
            require_implementation: Some(false),
        }
    }

    /// Implementation extensions, or the default list if unset.
    #[must_use]
    pub fn effective_implementation_extensions(&self) -> Vec<String> {
        self.implementation_extensions.clone().unwrap_or_else(|| {
            DEFAULT_IMPLEMENTATION_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }

    /// Header extension, or the default if unset.
    #[must_use]
    pub fn effective_header_extension(&self) -> &str {
        self.header_extension
            .as_deref()
            .unwrap_or(DEFAULT_HEADER_EXTENSION)
    }

    /// Once-guard directive, or the default if unset.
    #[must_use]
    pub fn effective_once_guard(&self) -> &str {
        self.once_guard.as_deref().unwrap_or(DEFAULT_ONCE_GUARD)
    }

    /// Whether a root implementation is required; `false` if unset.
    #[must_use]
    pub fn effective_require_implementation(&self) -> bool {
        self.require_implementation.unwrap_or(false)
    }
}
