//! Integration tests for error handling and exit codes.
//!
//! These tests verify that srcmerge reports errors once on stderr, writes
//! nothing to stdout on failure, and returns the documented exit codes:
//! - Exit code 0: Success
//! - Exit code 2: A named file was not found
//! - Exit code 3: A file exists but could not be read
//! - Exit code 4: Invalid arguments
//! - Exit code 6: Required implementation file missing
//! - Exit code 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    let root = env.write_library();

    env.command().arg("merge").arg(&root).assert().code(0);
}

#[test]
fn test_missing_root_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["merge", "nope.h"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("nope.h"));
}

#[test]
fn test_missing_nested_include_exit_code() {
    let env = TestEnv::new();
    env.write_tree(&[
        ("a.h", "#include \"b.h\"\n"),
        ("b.h", "#include \"gone.h\"\n"),
    ]);

    env.command()
        .args(["merge", "a.h"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gone.h"));
}

#[test]
fn test_unreadable_include_exit_code() {
    let env = TestEnv::new();
    env.write("a.h", "#include \"dir.h\"\n");
    std::fs::create_dir(env.path().join("dir.h")).unwrap();

    env.command()
        .args(["merge", "a.h"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_required_implementation_exit_code() {
    let env = TestEnv::new();
    env.write("solo.h", "int solo;\n");

    env.command()
        .args(["merge", "solo.h", "--require-impl"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("no implementation file"));
}

#[test]
fn test_invalid_extension_exit_code() {
    let env = TestEnv::new();
    env.write("solo.h", "int solo;\n");

    env.command()
        .args(["merge", "solo.h", "--impl-ext", "c"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_malformed_project_config_exit_code() {
    let env = TestEnv::new();
    env.write_tree(&[
        ("srcmerge.yaml", "unknown_key: true\n"),
        ("solo.h", "int solo;\n"),
    ]);

    env.command()
        .args(["merge", "solo.h"])
        .assert()
        .code(7);
}

#[test]
fn test_missing_subcommand_argument() {
    let env = TestEnv::new();

    env.command()
        .arg("merge")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_error_reported_once() {
    let env = TestEnv::new();

    let output = env.command().args(["merge", "nope.h"]).output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Error:").count(), 1);
}
