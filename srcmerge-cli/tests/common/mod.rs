//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated home directory
//! - Fixtures for small C source trees

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests.
const SCRUBBED_ENV: [&str; 7] = [
    "SRCMERGE_LOG_MODE",
    "SRCMERGE_CONFIG",
    "SRCMERGE_OUTPUT_FORMAT",
    "SRCMERGE_IMPL_EXTENSIONS",
    "SRCMERGE_HEADER_EXTENSION",
    "SRCMERGE_ONCE_GUARD",
    "SRCMERGE_REQUIRE_IMPL",
];

/// Test environment with an isolated source tree and home directory.
///
/// This struct provides:
/// - A temporary directory holding the C sources under test
/// - A separate home directory so no user configuration is picked up
/// - Helper methods for writing files and running the binary
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory handed to the binary
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home_dir = temp_path.join("home");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            temp_path,
            home_dir,
        }
    }

    /// Get a command builder for the srcmerge binary.
    ///
    /// The command runs from the temp directory with `HOME` pointed at the
    /// isolated home and every `SRCMERGE_*` variable removed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("srcmerge").expect("Failed to find srcmerge binary");
        cmd.current_dir(&self.temp_path);
        cmd.env("HOME", &self.home_dir);
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temp directory, creating parents.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write several files at once.
    pub fn write_tree(&self, files: &[(&str, &str)]) {
        for (name, contents) in files {
            self.write(name, contents);
        }
    }

    /// Write a small library: a root header with one dependency, both with
    /// implementation files.
    ///
    /// Returns the root header path.
    pub fn write_library(&self) -> PathBuf {
        self.write_tree(&[
            (
                "lib/chan.h",
                "#pragma once\n#include \"util.h\"\nvoid chan_send(int v);\n",
            ),
            ("lib/util.h", "#pragma once\nint util_max(int a, int b);\n"),
            (
                "lib/chan.c",
                "#include \"chan.h\"\nvoid chan_send(int v) { (void)util_max(v, 0); }\n",
            ),
            (
                "lib/util.c",
                "#include \"util.h\"\nint util_max(int a, int b) { return a > b ? a : b; }\n",
            ),
        ]);
        self.temp_path.join("lib/chan.h")
    }

    /// Run `srcmerge merge` on `root` and return stdout.
    ///
    /// # Panics
    /// Panics if the merge fails.
    pub fn merge(&self, root: &Path) -> String {
        let output = self
            .command()
            .arg("merge")
            .arg(root)
            .output()
            .expect("Failed to run merge command");

        assert!(
            output.status.success(),
            "Merge failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
