use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use dynarray::DynArray;

fn bench_push(c: &mut Criterion) {
    c.bench_function("push 4096 from empty", |b| {
        b.iter(|| {
            let mut array = DynArray::new();
            for i in 0..4096i64 {
                array.push(black_box(i)).unwrap();
            }
            array
        })
    });

    c.bench_function("push 4096 reserved", |b| {
        b.iter(|| {
            let mut array = DynArray::with_capacity(4096).unwrap();
            for i in 0..4096i64 {
                array.push(black_box(i)).unwrap();
            }
            array
        })
    });
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("insert front 1024", |b| {
        b.iter(|| {
            let mut array = DynArray::new();
            for i in 0..1024i64 {
                array.insert(black_box(i), 0).unwrap();
            }
            array
        })
    });
}

criterion_group!(benches, bench_push, bench_insert_front);
criterion_main!(benches);
