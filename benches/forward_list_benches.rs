use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_forward_list::ForwardList;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::LinkedList;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn push_pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop_front");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("forward_list", size), |b| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for i in 0..size {
                    list.push_front(black_box(i));
                }
                while let Some(value) = list.pop_front() {
                    black_box(value);
                }
            })
        });

        group.bench_function(BenchmarkId::new("std_linked_list", size), |b| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.push_front(black_box(i));
                }
                while let Some(value) = list.pop_front() {
                    black_box(value);
                }
            })
        });
    }

    group.finish();
}

// Inserts after randomly chosen earlier positions.
fn insert_after_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_after_random");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("forward_list", size), |b| {
            b.iter_with_setup(
                || StdRng::seed_from_u64(size as u64),
                |mut rng| {
                    let mut list = ForwardList::with_capacity(size);
                    let mut positions = Vec::with_capacity(size);
                    positions.push(list.before_begin());
                    for i in 0..size {
                        let anchor = positions[rng.random_range(0..positions.len())];
                        positions.push(list.insert_after(anchor, i));
                    }
                    black_box(list.len())
                },
            )
        });
    }

    group.finish();
}

fn churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_after_churn");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("forward_list", size), |b| {
            b.iter_with_setup(
                || {
                    let list: ForwardList<usize> = (0..size).collect();
                    let mut order: Vec<usize> = (0..size / 2).collect();
                    order.shuffle(&mut StdRng::seed_from_u64(42));
                    (list, order)
                },
                |(mut list, order)| {
                    for n in order {
                        let mut pos = list.before_begin();
                        for _ in 0..n.min(16) {
                            pos = match list.next_position(pos) {
                                Some(next) if !next.is_end() => next,
                                _ => break,
                            };
                        }
                        if list.try_erase_after(pos).is_ok() {
                            list.push_front(n);
                        }
                    }
                    black_box(list)
                },
            )
        });
    }

    group.finish();
}

fn clone_clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_clear");

    for size in SIZES {
        let source: ForwardList<usize> = (0..size).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("clone", size), &source, |b, source| {
            b.iter(|| black_box(source.clone()))
        });

        group.bench_with_input(BenchmarkId::new("clear", size), &source, |b, source| {
            b.iter_with_setup(|| source.clone(), |mut list| list.clear())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    push_pop_benchmark,
    insert_after_benchmark,
    churn_benchmark,
    clone_clear_benchmark
);
criterion_main!(benches);
