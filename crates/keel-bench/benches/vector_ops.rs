//! Criterion micro-benchmarks for vector growth, insertion, and bulk transfer.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use keel_bench::{insertion_positions, removal_mask, INSERT_COUNT};
use keel_vector::Vector;

/// Benchmark: 100K appends through `insert(len, v)`.
fn bench_insert_at_end_100k(c: &mut Criterion) {
    c.bench_function("vector_insert_at_end_100k", |b| {
        b.iter(|| {
            let mut v = Vector::new();
            for i in 0..INSERT_COUNT as i32 {
                v.insert(i as usize, i).unwrap();
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: 100K `push_back` calls from empty.
fn bench_push_back_100k(c: &mut Criterion) {
    c.bench_function("vector_push_back_100k", |b| {
        b.iter(|| {
            let mut v = Vector::new();
            for i in 0..INSERT_COUNT as i32 {
                v.push_back(i);
            }
            black_box(v.capacity());
        });
    });
}

/// Benchmark: 10K inserts at seeded random positions.
fn bench_insert_random_10k(c: &mut Criterion) {
    let positions = insertion_positions(42, 10_000);
    c.bench_function("vector_insert_random_10k", |b| {
        b.iter(|| {
            let mut v = Vector::new();
            for (i, &at) in positions.iter().enumerate() {
                v.insert(at, i).unwrap();
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: split a 100K vector in half and merge it back.
fn bench_split_merge_100k(c: &mut Criterion) {
    c.bench_function("vector_split_merge_100k", |b| {
        b.iter_batched(
            || (0..INSERT_COUNT as u64).collect::<Vector<u64>>(),
            |mut v| {
                let mut tail = Vector::new();
                v.split_off_into(INSERT_COUNT / 2, &mut tail).unwrap();
                v.merge_from(&mut tail);
                black_box(v)
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: single-pass compaction removing ~30% of 100K elements.
fn bench_remove_all_100k(c: &mut Criterion) {
    let mask = removal_mask(7, INSERT_COUNT, 30);
    c.bench_function("vector_remove_all_100k", |b| {
        b.iter_batched(
            || (0..INSERT_COUNT).collect::<Vector<usize>>(),
            |mut v| {
                let removed = v.remove_all(|&i| mask[i]);
                black_box(removed)
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_insert_at_end_100k,
    bench_push_back_100k,
    bench_insert_random_10k,
    bench_split_merge_100k,
    bench_remove_all_100k
);
criterion_main!(benches);
