//! for_each throughput vs a serial loop
//!
//! The action is deliberately tiny (atomic add), so this measures
//! dispatch overhead more than parallel speedup; heavier actions are
//! where the pool pays off.

use std::sync::atomic::{AtomicU64, Ordering};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parslot::{Dispatcher, DispatcherConfig};

fn bench_for_each(c: &mut Criterion) {
    let dispatcher = Dispatcher::new(DispatcherConfig::default()).unwrap();

    let mut group = c.benchmark_group("for_each");
    for n in [1_000_usize, 100_000, 1_000_000] {
        let input: Vec<u64> = (0..n as u64).collect();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("serial", n), &input, |b, input| {
            b.iter(|| {
                let sum = AtomicU64::new(0);
                for e in input {
                    sum.fetch_add(*e, Ordering::Relaxed);
                }
                black_box(sum.load(Ordering::Relaxed))
            })
        });

        group.bench_with_input(BenchmarkId::new("pool", n), &input, |b, input| {
            b.iter(|| {
                let sum = AtomicU64::new(0);
                dispatcher
                    .for_each(input, |e| {
                        sum.fetch_add(*e, Ordering::Relaxed);
                    })
                    .unwrap();
                black_box(sum.load(Ordering::Relaxed))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_for_each);
criterion_main!(benches);
