//! Basic benchmarks for the `sparse_array` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use sparse_array::SparseArray;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;
const WARM_CAPACITY: usize = 64;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_basic");

    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(SparseArray::<TestItem>::new(WARM_CAPACITY)));
            }

            start.elapsed()
        });
    });

    group.bench_function("push_first", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(|| SparseArray::<TestItem>::new(WARM_CAPACITY))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let start = Instant::now();

            for array in &mut arrays {
                array.push(black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    group.bench_function("push_with_growth", |b| {
        b.iter_custom(|iters| {
            // Capacity 1 with grow step 1 makes every push reallocate.
            let mut arrays = iter::repeat_with(|| {
                let mut array = SparseArray::<TestItem>::new(1);
                array.push(TEST_VALUE);
                array
            })
            .take(usize::try_from(iters).unwrap())
            .collect::<Vec<_>>();

            let start = Instant::now();

            for array in &mut arrays {
                array.push(black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    group.bench_function("get_one", |b| {
        b.iter_custom(|iters| {
            let mut array = SparseArray::<TestItem>::new(WARM_CAPACITY);
            array.push(TEST_VALUE);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(array.get(black_box(0)));
            }

            start.elapsed()
        });
    });

    group.bench_function("pop_one", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(|| {
                let mut array = SparseArray::<TestItem>::new(WARM_CAPACITY);
                array.push(TEST_VALUE);
                array
            })
            .take(usize::try_from(iters).unwrap())
            .collect::<Vec<_>>();

            let start = Instant::now();

            for array in &mut arrays {
                _ = black_box(array.pop());
            }

            start.elapsed()
        });
    });

    group.bench_function("set_sparse", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(|| SparseArray::<TestItem>::new(WARM_CAPACITY))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let start = Instant::now();

            for array in &mut arrays {
                array.set(black_box(32), black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    group.bench_function("len", |b| {
        b.iter_custom(|iters| {
            let mut array = SparseArray::<TestItem>::new(WARM_CAPACITY);

            for _ in 0..WARM_CAPACITY {
                array.push(TEST_VALUE);
            }

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(array.len());
            }

            start.elapsed()
        });
    });

    group.bench_function("capacity", |b| {
        b.iter_custom(|iters| {
            let mut array = SparseArray::<TestItem>::new(WARM_CAPACITY);

            for _ in 0..WARM_CAPACITY {
                array.push(TEST_VALUE);
            }

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(array.capacity());
            }

            start.elapsed()
        });
    });

    group.finish();

    let mut group = c.benchmark_group("sa_slow");

    group.bench_function("push_10k", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(|| SparseArray::<TestItem>::new(WARM_CAPACITY))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let start = Instant::now();

            for array in &mut arrays {
                for _ in 0..10_000 {
                    array.push(black_box(TEST_VALUE));
                }
            }

            start.elapsed()
        });
    });

    group.bench_function("purge_10k", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(|| {
                let mut array = SparseArray::<TestItem>::new(WARM_CAPACITY);
                for _ in 0..10_000 {
                    array.push(TEST_VALUE);
                }
                array
            })
            .take(usize::try_from(iters).unwrap())
            .collect::<Vec<_>>();

            let start = Instant::now();

            for array in &mut arrays {
                array.purge();
            }

            start.elapsed()
        });
    });

    group.finish();
}
