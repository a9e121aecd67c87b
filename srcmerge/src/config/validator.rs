//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::include::OnceGuard;
use std::collections::HashSet;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use srcmerge::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref extensions) = config.implementation_extensions {
            Self::validate_extension_list(extensions)?;
        }

        if let Some(ref header) = config.header_extension {
            Self::validate_extension("header_extension", header)?;
        }

        if let Some(ref guard) = config.once_guard {
            OnceGuard::parse(guard)?;
        }

        Ok(())
    }

    fn validate_extension_list(extensions: &[String]) -> Result<()> {
        if extensions.is_empty() {
            return Err(Error::Validation {
                field: "implementation_extensions".into(),
                message: "At least one extension is required".into(),
            });
        }

        let mut seen = HashSet::new();
        for extension in extensions {
            Self::validate_extension("implementation_extensions", extension)?;
            if !seen.insert(extension.as_str()) {
                return Err(Error::Validation {
                    field: "implementation_extensions".into(),
                    message: format!("Duplicate extension '{extension}'"),
                });
            }
        }
        Ok(())
    }

    /// An extension is a leading dot followed by at least one character,
    /// with no path separator.
    fn validate_extension(field: &str, extension: &str) -> Result<()> {
        if !extension.starts_with('.') || extension.len() < 2 {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Extension '{extension}' must start with '.' and be non-empty"),
            });
        }
        if extension.contains(|c: char| c == '/' || c == '\\') {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Extension '{extension}' must not contain a path separator"),
            });
        }
        if extension.chars().any(char::is_whitespace) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Extension '{extension}' must not contain whitespace"),
            });
        }
        Ok(())
    }
}
