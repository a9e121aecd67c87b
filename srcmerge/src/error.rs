//! Error types for the srcmerge library.
//!
//! Every fallible operation in the library returns [`Result`]. Errors are
//! never recovered from inside the merge: the first failure aborts the whole
//! run and is handed back to the caller untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a srcmerge error.
///
/// # Examples
///
/// ```
/// use srcmerge::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the srcmerge library.
#[derive(Debug, Error)]
pub enum Error {
    /// A named file does not resolve to an existing path.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// The path as it was resolved (or as written, if resolution failed).
        path: PathBuf,
    },

    /// A file exists but its contents could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An implementation file was required but none exists for the header.
    #[error("no implementation file found for {}", header.display())]
    NoImplementationFound {
        /// The header whose implementation was expected.
        header: PathBuf,
    },

    /// A path could not be normalized.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// The file list could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcmerge::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound { path: PathBuf::from("/nonexistent.h") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
