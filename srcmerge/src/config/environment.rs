//! Environment variable handling for configuration overrides.
//!
//! This module provides support for SRCMERGE_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Comma-separated implementation extensions, in priority order.
pub const IMPL_EXTENSIONS_ENV: &str = "SRCMERGE_IMPL_EXTENSIONS";

/// Header extension override.
pub const HEADER_EXTENSION_ENV: &str = "SRCMERGE_HEADER_EXTENSION";

/// Once-guard directive override.
pub const ONCE_GUARD_ENV: &str = "SRCMERGE_ONCE_GUARD";

/// Boolean: require a root implementation.
pub const REQUIRE_IMPL_ENV: &str = "SRCMERGE_REQUIRE_IMPL";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use srcmerge::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(extensions) = env::var(IMPL_EXTENSIONS_ENV) {
            config.implementation_extensions = Some(Self::parse_extensions(&extensions)?);
        }

        if let Ok(extension) = env::var(HEADER_EXTENSION_ENV) {
            config.header_extension = Some(extension.trim().to_string());
        }

        if let Ok(guard) = env::var(ONCE_GUARD_ENV) {
            config.once_guard = Some(guard);
        }

        if let Ok(val) = env::var(REQUIRE_IMPL_ENV) {
            config.require_implementation = Some(Self::parse_bool(REQUIRE_IMPL_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse a comma-separated extension list, skipping empty entries.
    fn parse_extensions(s: &str) -> Result<Vec<String>> {
        let extensions: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect();

        if extensions.is_empty() {
            return Err(Error::Validation {
                field: IMPL_EXTENSIONS_ENV.into(),
                message: "At least one extension is required".into(),
            });
        }
        Ok(extensions)
    }
}
