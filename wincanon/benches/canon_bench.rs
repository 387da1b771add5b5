use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wincanon::{canonicalize, EnvironmentContext, PathFamily};

fn windows_ctx() -> EnvironmentContext {
    EnvironmentContext::new(PathFamily::Windows).with_home(r"C:\Users\bench")
}

fn cygwin_ctx() -> EnvironmentContext {
    EnvironmentContext::new(PathFamily::Cygwin).with_home(r"C:\Users\bench")
}

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    let ctx = windows_ctx();

    // Benchmark an already-canonical path
    group.bench_function("already_canonical", |b| {
        b.iter(|| canonicalize(black_box(r"C:\Users\bench\projects\app"), &ctx));
    });

    // Benchmark mixed-separator normalization
    group.bench_function("mixed_separators", |b| {
        b.iter(|| canonicalize(black_box(r"C:/Users\bench//projects\app"), &ctx));
    });

    // Benchmark dot-segment resolution
    group.bench_function("with_dots", |b| {
        b.iter(|| canonicalize(black_box(r"C:\a\b\..\c\.\d"), &ctx));
    });

    // Benchmark tilde expansion
    group.bench_function("tilde_expansion", |b| {
        b.iter(|| canonicalize(black_box(r"~\projects\src"), &ctx));
    });

    group.finish();
}

fn bench_family_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("family_translation");

    let input = r"C:\Users\bench\data\set\file.txt";
    for family in PathFamily::all() {
        let ctx = EnvironmentContext::new(family).with_home(r"C:\Users\bench");
        group.bench_with_input(BenchmarkId::from_parameter(family), &ctx, |b, ctx| {
            b.iter(|| canonicalize(black_box(input), ctx));
        });
    }

    group.finish();
}

fn bench_path_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_depth");
    let ctx = cygwin_ctx();

    for depth in [4usize, 16, 64] {
        let mut input = String::from("C:");
        for i in 0..depth {
            input.push_str(&format!("\\segment{i}"));
        }
        group.bench_with_input(BenchmarkId::from_parameter(depth), &input, |b, input| {
            b.iter(|| canonicalize(black_box(input), &ctx));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_canonicalize,
    bench_family_translation,
    bench_path_depth
);
criterion_main!(benches);
