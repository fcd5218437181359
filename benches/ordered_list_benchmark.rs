use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparse_chunked::OrderedList;
use std::collections::{LinkedList, VecDeque};

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_list_push");

    group.bench_function("ordered_list_push", |b| {
        b.iter(|| {
            let mut list = OrderedList::new();
            for i in 0..10_000 {
                list.push(i);
            }
            black_box(list.len());
        });
    });

    group.bench_function("std_linked_list_push", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..10_000 {
                list.push_back(i);
            }
            black_box(list.len());
        });
    });

    group.finish();
}

fn bench_both_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_list_both_ends");

    group.bench_function("ordered_list_unshift_pop", |b| {
        b.iter(|| {
            let mut list = OrderedList::new();
            for i in 0..1000 {
                list.unshift(i);
                list.push(i);
            }
            let mut sum = 0;
            while let Ok(x) = list.pop() {
                sum += x;
            }
            black_box(sum);
        });
    });

    group.bench_function("vec_deque_push_front_pop_back", |b| {
        b.iter(|| {
            let mut list = VecDeque::new();
            for i in 0..1000 {
                list.push_front(i);
                list.push_back(i);
            }
            let mut sum = 0;
            while let Some(x) = list.pop_back() {
                sum += x;
            }
            black_box(sum);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_both_ends);
criterion_main!(benches);
