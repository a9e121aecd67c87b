//! File list formatter implementations.

use crate::Result;

use super::{FileEntry, FileListFormatter};

/// Formatter listing one normalized path per line.
pub struct HumanFormatter;

impl FileListFormatter for HumanFormatter {
    fn format(&self, entries: &[FileEntry]) -> Result<String> {
        Ok(entries
            .iter()
            .map(|entry| entry.path.display().to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl FileListFormatter for JsonFormatter {
    fn format(&self, entries: &[FileEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }
}
