//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `merge`: Merge a root header into a single translation unit
//! - `files`: List the files a merge would consume
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod files;
pub mod merge;

pub use completions::CompletionsCommand;
pub use files::FilesCommand;
pub use merge::MergeCommand;
