//! Benchmarks for Routh array construction and classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use routh_core::prelude::*;

/// Coefficients of (s + 1)^n, all strictly positive.
fn binomial_coefficients(n: usize) -> Vec<f64> {
    let mut row = vec![1.0];
    for _ in 0..n {
        let mut next = vec![1.0; row.len() + 1];
        for k in 1..row.len() {
            next[k] = row[k - 1] + row[k];
        }
        row = next;
    }
    row
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("routh_array_build");

    for degree in [4, 8, 16, 32] {
        let coefficients = binomial_coefficients(degree);
        group.bench_with_input(BenchmarkId::new("degree", degree), &coefficients, |b, coeffs| {
            b.iter(|| RouthArray::build(black_box(coeffs)).unwrap());
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let array = RouthArray::build(&binomial_coefficients(16)).unwrap();
    c.bench_function("classify_degree_16", |b| {
        b.iter(|| classify(black_box(&array)));
    });
}

criterion_group!(benches, bench_build, bench_classify);
criterion_main!(benches);
