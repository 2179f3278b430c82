//! Criterion benchmarks for the bracketing root finders.
//!
//! Compares bisection and Dekker's method on smooth objectives at several
//! tolerances to show the iteration-count gap between linear and
//! superlinear convergence.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use impvol_core::math::solvers::{RootFindMethod, RootFinder, SolverConfig};

/// Benchmark both methods on x³ - x - 2 over [1, 2].
fn bench_cubic(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic_root");
    let f = |x: f64| x * x * x - x - 2.0;

    for tolerance in [1e-6, 1e-10, 1e-14] {
        for method in RootFindMethod::ALL {
            let finder = RootFinder::new(method, SolverConfig::new(tolerance, 500));
            group.bench_with_input(
                BenchmarkId::new(method.name(), format!("{:e}", tolerance)),
                &finder,
                |b, finder| {
                    b.iter(|| finder.solve(f, black_box(1.0), black_box(2.0)));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark a normal-CDF-shaped objective over a wide bracket, the shape an
/// implied volatility inversion sees.
fn bench_wide_bracket(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_bracket");
    let f = |x: f64| (x - 0.2).atan() * (1.0 + x * x).ln_1p();

    for method in RootFindMethod::ALL {
        let finder = RootFinder::new(method, SolverConfig::default());
        group.bench_with_input(
            BenchmarkId::new(method.name(), "0..100"),
            &finder,
            |b, finder| {
                b.iter(|| finder.solve(f, black_box(0.0), black_box(100.0)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cubic, bench_wide_bracket);
criterion_main!(benches);
