use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use devfolio_files::{Exporter, FileRegistry};
use std::hint::black_box;

/// Benchmark `get_file` across registry sizes
fn bench_get_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_file");

    for size in [10, 100, 1000, 10000] {
        let registry = registry_with_files(size);
        let id = format!("file-{}", size / 2);

        group.bench_with_input(BenchmarkId::new("hit", size), &id, |b, id| {
            b.iter(|| registry.get_file(black_box(id)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &"file-0", |b, id| {
            b.iter(|| registry.get_file(black_box(id)));
        });
    }

    group.finish();
}

/// Benchmark `list_files` (insertion order)
fn bench_list_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_files");

    for size in [10, 100, 1000] {
        let registry = registry_with_files(size);
        group.bench_with_input(BenchmarkId::new("list", size), &size, |b, _| {
            b.iter(|| black_box(registry.list_files()));
        });
    }

    group.finish();
}

/// Benchmark delete, which also prunes the order list
fn bench_delete_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_file");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("middle", size), &size, |b, &size| {
            b.iter_batched(
                || registry_with_files(size),
                |mut registry| registry.delete_file(&format!("file-{}", size / 2)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark atomic export of documents of different sizes
fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    let temp = tempfile::TempDir::new().unwrap();
    let exporter = Exporter::new(temp.path());

    for kib in [1, 64, 512] {
        let content = "x".repeat(kib * 1024);
        group.bench_with_input(BenchmarkId::new("atomic", kib), &content, |b, content| {
            b.iter(|| exporter.export("bench.md", black_box(content)).unwrap());
        });
    }

    group.finish();
}

fn registry_with_files(count: usize) -> FileRegistry {
    let mut registry = FileRegistry::new();
    for i in 0..count {
        registry.create_file(format!("note_{i}.md"), format!("# Note {i}"));
    }
    registry
}

criterion_group!(
    benches,
    bench_get_file,
    bench_list_files,
    bench_delete_file,
    bench_export
);
criterion_main!(benches);
