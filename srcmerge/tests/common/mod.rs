//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for small C source trees and
//! helpers for inspecting merged output.

use std::fs;
use std::path::{Path, PathBuf};

use srcmerge::{Config, MergeOutput, Merger};
use tempfile::TempDir;

/// A temporary directory populated with source files.
///
/// The directory is removed when the fixture is dropped.
pub struct SourceTree {
    dir: TempDir,
}

#[allow(dead_code)]
impl SourceTree {
    /// Creates a tree holding `files`, given as `(relative path, contents)`.
    pub fn new(files: &[(&str, &str)]) -> Self {
        let tree = Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        };
        for (name, contents) in files {
            tree.write(name, contents);
        }
        tree
    }

    /// The tree's root directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `name` inside the tree.
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes (or overwrites) one file, creating parent directories.
    pub fn write(&self, name: &str, contents: &str) {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directory");
        }
        fs::write(path, contents).expect("failed to write fixture file");
    }

    /// Merges `root` with the built-in default configuration.
    pub fn merge(&self, root: &str) -> srcmerge::Result<MergeOutput> {
        Merger::new(Config::with_defaults()).merge(&self.join(root))
    }
}

/// Number of banner blocks emitted for `name`.
#[allow(dead_code)]
pub fn block_count(text: &str, name: &str) -> usize {
    text.matches(&format!("// ## {name}\n")).count()
}

/// Base names of the consumed files, in manifest order.
#[allow(dead_code)]
pub fn manifest_names(output: &MergeOutput) -> Vec<String> {
    output.files.iter().map(|path| path.file_name()).collect()
}
