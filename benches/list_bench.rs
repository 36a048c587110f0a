//! Benchmark for `List` against `VecDeque`, and for `ListMonad::bind`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kindred::data::{List, ListMonad};
use kindred::typeclass::Bind;
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// cons Benchmark (prepend)
// =============================================================================

fn benchmark_cons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cons");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = List::new();
                for index in 0..size {
                    list = list.cons(black_box(index));
                }
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = VecDeque::new();
                for index in 0..size {
                    deque.push_front(black_box(index));
                }
                black_box(deque)
            });
        });
    }

    group.finish();
}

// =============================================================================
// bind Benchmark
// =============================================================================

fn benchmark_bind(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind");

    for size in [100, 1000] {
        let list: List<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("ListMonad", size), &size, |bencher, _| {
            bencher.iter(|| {
                let doubled = ListMonad.bind(list.clone(), |n: i64| List::from_slice(&[n, n]));
                black_box(doubled)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_cons, benchmark_bind);
criterion_main!(benches);
