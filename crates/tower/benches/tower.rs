//! Benchmarks for the tower's cost model.
//!
//! Measures the unary cost of successor-chain conversions, the deferred cost
//! of forcing lazy real arithmetic, and bisection roots at increasing
//! iteration budgets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_bigint::BigUint;
use number_tower::prelude::*;
use number_tower::{IntegerIsomorphism, NaturalIsomorphism};

// ============================================================================
// Benchmark: unary conversion (linear in the value)
// ============================================================================

fn bench_natural_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("natural_conversion");

    for n in [64u32, 256, 1024, 4096] {
        group.throughput(Throughput::Elements(u64::from(n)));
        let efficient = BigUint::from(n);
        let chain = VonNeumannNatural::from_count(&efficient);

        group.bench_with_input(BenchmarkId::new("from_count", n), &efficient, |b, k| {
            b.iter(|| black_box(VonNeumannNatural::from_count(black_box(k))));
        });

        group.bench_with_input(BenchmarkId::new("count", n), &chain, |b, v| {
            b.iter(|| black_box(black_box(v).count()));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: quotient arithmetic
// ============================================================================

fn bench_quotient_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("quotient_arithmetic");

    let a = ConstructedInteger::of(1_000_003, 7);
    let b = ConstructedInteger::of(11, 999_999);
    group.bench_function("integer_mul", |bench| {
        bench.iter(|| black_box(black_box(&a) * black_box(&b)));
    });

    let p = ConstructedRational::of(355, 113).unwrap();
    let q = ConstructedRational::of(-22, 7).unwrap();
    group.bench_function("rational_div", |bench| {
        bench.iter(|| black_box(black_box(&p).checked_div(black_box(&q))));
    });
    group.bench_function("rational_eq", |bench| {
        bench.iter(|| black_box(black_box(&p) == black_box(&q)));
    });

    group.finish();
}

// ============================================================================
// Benchmark: build now, pay later
// ============================================================================

fn bench_lazy_reals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_reals");
    let root = ConstructedReal::sqrt(&ConstructedRational::of(2, 1).unwrap(), 64).unwrap();

    for depth in [1usize, 4, 16] {
        let chain = (0..depth).fold(root.clone(), |acc, _| &acc + &root);

        group.bench_with_input(BenchmarkId::new("build_sum_chain", depth), &depth, |b, d| {
            b.iter(|| black_box((0..*d).fold(root.clone(), |acc, _| &acc + &root)));
        });

        group.bench_with_input(BenchmarkId::new("force_sum_chain", depth), &chain, |b, x| {
            b.iter(|| black_box(black_box(x).approximate_rational(32)));
        });
    }

    let product = &root * &root;
    group.bench_function("force_product", |b| {
        b.iter(|| black_box(black_box(&product).approximate_rational(32)));
    });

    group.finish();
}

// ============================================================================
// Benchmark: bisection roots
// ============================================================================

fn bench_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("bisection_roots");
    let two = ConstructedRational::of(2, 1).unwrap();

    for iterations in [16u32, 32, 64, 128] {
        group.bench_with_input(BenchmarkId::new("sqrt2", iterations), &iterations, |b, n| {
            b.iter(|| {
                let root = ConstructedReal::sqrt(black_box(&two), *n).unwrap();
                black_box(root.approximate_rational(*n))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: bridge verification
// ============================================================================

fn bench_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("verification");
    group.sample_size(10);

    for bound in [8u32, 16] {
        group.bench_with_input(BenchmarkId::new("natural", bound), &bound, |b, n| {
            b.iter(|| black_box(NaturalIsomorphism::verify_round_trip(*n)));
        });
    }
    for bound in [25u32, 50] {
        group.bench_with_input(BenchmarkId::new("integer", bound), &bound, |b, n| {
            b.iter(|| black_box(IntegerIsomorphism::verify_round_trip(*n)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_natural_conversion,
    bench_quotient_arithmetic,
    bench_lazy_reals,
    bench_roots,
    bench_verification,
);
criterion_main!(benches);
