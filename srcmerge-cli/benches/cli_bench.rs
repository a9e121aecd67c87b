use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

/// Write a chain of `depth` headers, each with an implementation file.
fn write_chain(dir: &Path, depth: usize) {
    for i in 0..depth {
        let include = if i + 1 < depth {
            format!("#include \"h{}.h\"\n", i + 1)
        } else {
            String::new()
        };
        fs::write(
            dir.join(format!("h{i}.h")),
            format!("#pragma once\n{include}int f{i}(void);\n"),
        )
        .expect("failed to write header");
        fs::write(
            dir.join(format!("h{i}.c")),
            format!("#include \"h{i}.h\"\nint f{i}(void) {{ return {i}; }}\n"),
        )
        .expect("failed to write implementation");
    }
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("srcmerge").expect("failed to locate srcmerge binary");
            let output = cmd.arg("--version").output().expect("failed to run srcmerge");
            black_box(output);
        });
    });
}

fn bench_cli_merge(c: &mut Criterion) {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_chain(dir.path(), 50);
    let root = dir.path().join("h0.h");

    c.bench_function("cli_merge_chain_50", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("srcmerge").expect("failed to locate srcmerge binary");
            let output = cmd
                .env("HOME", dir.path())
                .arg("merge")
                .arg(&root)
                .output()
                .expect("failed to run srcmerge merge");
            assert!(output.status.success());
            black_box(output);
        });
    });
}

criterion_group!(benches, bench_cli_startup, bench_cli_merge);
criterion_main!(benches);
