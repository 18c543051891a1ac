//! Criterion benchmarks for both transforms.
//!
//! Run with: cargo bench

use array_transforms::{merge_sorted, product_except_self};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

/// Generate small random integers so products do not saturate to zero
fn generate_values(size: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(-3..=3)).collect()
}

/// Generate a sorted random vector of given size
fn generate_sorted(size: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    let mut data: Vec<i64> = (0..size).map(|_| rng.gen()).collect();
    data.sort_unstable();
    data
}

fn bench_product_except_self(c: &mut Criterion) {
    let mut group = c.benchmark_group("Product Except Self");

    for size_exp in [10, 12, 14, 16, 18, 20] {
        let size = 1usize << size_exp;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || generate_values(size),
                |data| product_except_self(black_box(&data)),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_merge_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("Merge Sorted");

    for size_exp in [10, 12, 14, 16, 18, 20] {
        let size = 1usize << size_exp;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || (generate_sorted(size / 2), generate_sorted(size - size / 2)),
                |(left, right)| merge_sorted(black_box(&left), black_box(&right)),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_product_except_self, bench_merge_sorted);
criterion_main!(benches);
