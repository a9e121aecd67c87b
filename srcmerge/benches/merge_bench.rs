use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use srcmerge::{Config, Merger};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `width` modules under `dir`, where module `i` includes modules
/// `i + 1` and `i + 2`, and every module has an implementation file.
fn write_tree(dir: &Path, width: usize) {
    for i in 0..width {
        let mut header = String::from("#pragma once\n");
        for next in [i + 1, i + 2] {
            if next < width {
                header.push_str(&format!("#include \"mod{next}.h\"\n"));
            }
        }
        for line in 0..20 {
            header.push_str(&format!("int mod{i}_fn{line}(int x);\n"));
        }
        fs::write(dir.join(format!("mod{i}.h")), header).expect("failed to write header");

        let mut implementation = format!("#include \"mod{i}.h\"\n");
        for line in 0..20 {
            implementation.push_str(&format!("int mod{i}_fn{line}(int x) {{ return x + {line}; }}\n"));
        }
        fs::write(dir.join(format!("mod{i}.c")), implementation)
            .expect("failed to write implementation");
    }
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for width in [10, 100] {
        let dir = TempDir::new().expect("failed to create temp dir");
        write_tree(dir.path(), width);
        let root = dir.path().join("mod0.h");
        let merger = Merger::new(Config::with_defaults());

        group.bench_with_input(BenchmarkId::new("dag", width), &root, |b, root| {
            b.iter(|| {
                let output = merger.merge(black_box(root)).expect("merge failed");
                black_box(output.render())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
