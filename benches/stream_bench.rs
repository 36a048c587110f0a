//! Benchmark for forcing `Stream` prefixes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kindred::data::{Stream, StreamMonad};
use kindred::typeclass::{Bind, Functor};
use std::hint::black_box;

fn benchmark_take(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stream_take");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("map_filter", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let squares = StreamMonad.map(Stream::range(0), |n: i64| n * n);
                black_box(squares.filter(|n: &i64| n % 3 == 0).take(size))
            });
        });
    }

    group.finish();
}

fn benchmark_diagonal_bind(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stream_bind");

    for size in [10, 100] {
        group.bench_with_input(BenchmarkId::new("diagonal", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let stream = StreamMonad.bind(Stream::range(1), |step: i64| Stream::range_by(1, step));
                black_box(stream.take(size))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_take, benchmark_diagonal_bind);
criterion_main!(benches);
