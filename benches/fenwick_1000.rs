use core::hint::black_box;
use std::path::Path;

use criterion::{criterion_group, criterion_main, Criterion};

use range_query_trees::FenwickSum;

/// Size used for the benchmarks.
const SIZE: usize = 1000;

mod rng;

fn bench_constructors(c: &mut Criterion) {
    let values: Vec<i64> = (1..=SIZE as i64).collect();

    c.bench_function("fenwick_new_1000", |b| {
        b.iter(|| {
            let tree = FenwickSum::<i64>::new(SIZE);
            black_box(&tree);
        })
    });

    c.bench_function("fenwick_from_slice_1000", |b| {
        b.iter(|| {
            let tree = FenwickSum::<i64>::from_slice(&values);
            black_box(&tree);
        })
    });
}

fn bench_range_query(c: &mut Criterion) {
    let values: Vec<i64> = (1..=SIZE as i64).collect();
    let tree = FenwickSum::<i64>::from_slice(&values);

    let mut rng = rng::Lcg::new(0xC0FFEE);

    c.bench_function("fenwick_range_query_1000", |b| {
        b.iter_batched(
            || {
                let left = rng.next_usize(SIZE);
                let right = rng.next_usize(SIZE);
                if left <= right {
                    (left, right)
                } else {
                    (right, left)
                }
            },
            |(left, right)| {
                let res = tree.query(left..right);
                black_box(res);
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_point_update(c: &mut Criterion) {
    let values: Vec<i64> = (1..=SIZE as i64).collect();
    let mut tree = FenwickSum::<i64>::from_slice(&values);

    let mut rng = rng::Lcg::new(0xFEED_FACE);

    c.bench_function("fenwick_point_update_1000", |b| {
        b.iter_batched(
            || {
                let idx = rng.next_usize(SIZE);
                let val = rng.next_i64(1024);
                (idx, val)
            },
            |(idx, val)| {
                tree.update(idx, val);
                black_box(&tree);
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().output_directory(Path::new("target/criterion/fenwick_1000"))
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_constructors,
              bench_range_query,
              bench_point_update,
}
criterion_main!(benches);
