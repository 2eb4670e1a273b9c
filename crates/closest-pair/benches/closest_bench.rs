//! Criterion benches: brute force vs. divide and conquer.
//! Sizes: n in {16, 128, 1024, 8192} (brute force stops at 1024).
//! Results live under `target/criterion`.

use closest_pair::geom2::rand::{boundary_dense_points, uniform_points, Bounds, ReplayToken};
use closest_pair::solve::{
    brute_force, divide_and_conquer, divide_and_conquer_traced, divide_and_conquer_with, NoTrace,
    SolveCfg,
};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    for &n in &[16usize, 128, 1024, 8192] {
        let tok = ReplayToken { seed: 42, index: n as u64 };
        let pts = uniform_points(n, Bounds::default(), tok);

        if n <= 1024 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &pts, |b, pts| {
                b.iter(|| brute_force(pts).unwrap())
            });
        }
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &pts, |b, pts| {
            b.iter(|| divide_and_conquer(pts).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("traced", n), &pts, |b, pts| {
            b.iter_batched(
                || pts.clone(),
                |pts| divide_and_conquer_traced(&pts).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_boundary_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary_dense");
    for &n in &[1024usize, 8192] {
        let pts = boundary_dense_points(n, 1e-3, ReplayToken { seed: 7, index: 0 });
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &pts, |b, pts| {
            b.iter(|| divide_and_conquer_with(pts, SolveCfg::default(), &mut NoTrace).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solvers, bench_boundary_dense);
criterion_main!(benches);
