use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use classics::sort::{bubble_sort, merge_sort};

/// A shuffled-looking but deterministic sequence so runs are comparable.
fn scrambled(len: usize) -> Vec<i64> {
    (0..len as i64).map(|x| (x * 7919) % 10007).collect()
}

/// Helper to bench a sort on inputs of various sizes and orders.
fn bench_helper(c: &mut Criterion, name: &str, f: fn(&mut [i64])) {
    let mut group = c.benchmark_group(name);

    for len in [16, 256, 4096] {
        let inputs = [
            ("scrambled", scrambled(len)),
            ("sorted", (0..len as i64).collect()),
            ("reversed", (0..len as i64).rev().collect()),
        ];
        for (order, input) in inputs {
            group.bench_function(BenchmarkId::new(order, len), |b| {
                b.iter_batched(
                    || input.clone(),
                    |mut xs| f(black_box(&mut xs)),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "bubble-sort", bubble_sort::<i64>);
    bench_helper(c, "merge-sort", merge_sort::<i64>);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
