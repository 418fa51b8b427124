// ============================================================================
// Vector Algebra Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Products - Rounded vs exact dot product across dimensions
// 2. Normalization - Decimal square root and scaling
// 3. Cross Product - 3D and lifted 2D operands
// 4. Projection - Full component decomposition
//
// Notes:
// - Dimensions 2-4 stay in inline storage; 16 and 64 spill to the heap
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use std::hint::black_box;
use vector_algebra::prelude::*;

fn make_vector(dimension: usize, seed: i64) -> Vector {
    Vector::new((0..dimension as i64).map(|i| Decimal::new((i * 7919 + seed) % 20_000 - 10_000, 3)))
        .unwrap()
}

// ============================================================================
// Dot Product Benchmarks
// ============================================================================

fn benchmark_dot_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_product");
    let standard = VectorAlgebra::standard();
    let exact = VectorAlgebra::new(VectorConfig::exact());

    for dimension in [2, 3, 16, 64].iter() {
        let a = make_vector(*dimension, 17);
        let b = make_vector(*dimension, 4242);

        group.bench_with_input(
            BenchmarkId::new("rounded", dimension),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| black_box(standard.dot(a, b).unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("exact", dimension),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| black_box(exact.dot(a, b).unwrap())),
        );
    }

    group.finish();
}

// ============================================================================
// Normalization Benchmarks
// ============================================================================

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for dimension in [2, 3, 16, 64].iter() {
        let v = make_vector(*dimension, 99);
        group.bench_with_input(BenchmarkId::from_parameter(dimension), &v, |bench, v| {
            bench.iter(|| black_box(v.normalize().unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// Cross Product Benchmarks
// ============================================================================

fn benchmark_cross_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_product");

    let a3 = Vector::new([8.462, 7.893, -8.187]).unwrap();
    let b3 = Vector::new([6.984, -5.975, 4.778]).unwrap();
    group.bench_function("3D", |bench| {
        bench.iter(|| black_box(a3.cross(&b3).unwrap()))
    });

    let a2 = Vector::new([3.183, -7.627]).unwrap();
    let b2 = Vector::new([-2.668, 5.319]).unwrap();
    group.bench_function("2D_lifted", |bench| {
        bench.iter(|| black_box(a2.cross(&b2).unwrap()))
    });

    group.bench_function("triangle_area", |bench| {
        bench.iter(|| black_box(a3.triangle_area(&b3).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Projection Benchmarks
// ============================================================================

fn benchmark_component_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_vectors");

    for dimension in [2, 4, 16].iter() {
        let v = make_vector(*dimension, 3);
        let basis = make_vector(*dimension, 1009);
        group.bench_with_input(
            BenchmarkId::from_parameter(dimension),
            &(&v, &basis),
            |bench, (v, basis)| bench.iter(|| black_box(v.component_vectors(basis).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_dot_product,
    benchmark_normalize,
    benchmark_cross_product,
    benchmark_component_vectors,
);
criterion_main!(benches);
