//! Output formatting for merged sources and file lists.
//!
//! The merged text itself is assembled from the banners in [`banner`]. The
//! list of consumed files can additionally be rendered in a human-readable
//! or JSON form through a [`FileListFormatter`].

pub mod banner;
mod formatters;

use std::path::PathBuf;

use serde::Serialize;

use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// Whether a consumed file is a header or an implementation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Any file not carrying an implementation extension.
    Header,
    /// A file carrying one of the configured implementation extensions.
    Implementation,
}

/// One file consumed by a merge, as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Normalized absolute path.
    pub path: PathBuf,
    /// Base name, as shown in the manifest banner.
    pub name: String,
    /// Header or implementation.
    pub kind: FileKind,
}

/// Trait for formatting the list of consumed files.
pub trait FileListFormatter {
    /// Format the given entries, which arrive in first-visit order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, entries: &[FileEntry]) -> Result<String>;
}

/// Available output formats for the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileListFormat {
    /// One path per line.
    #[default]
    Human,
    /// A JSON array of entries.
    Json,
}

impl FileListFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn FileListFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
