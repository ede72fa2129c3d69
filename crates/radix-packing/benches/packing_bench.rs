use criterion::{black_box, criterion_group, criterion_main, Criterion};

use radix_packing::{pack_dense, pack_max, PackingEngine};

fn bases() -> Vec<u128> {
    (3..=1000).collect()
}

fn bench_max(c: &mut Criterion) {
    let bases = bases();
    c.bench_function("max_3_to_1000", |b| {
        b.iter(|| pack_max(black_box(bases.iter().copied())).count());
    });
}

fn bench_dense(c: &mut Criterion) {
    let bases = bases();
    c.bench_function("dense_3_to_1000", |b| {
        b.iter(|| pack_dense(black_box(&bases)).map(Iterator::count));
    });
}

fn bench_engine(c: &mut Criterion) {
    let bases = bases();
    let engine = PackingEngine::default();
    c.bench_function("engine_dense_3_to_1000", |b| {
        b.iter(|| engine.pack(black_box(&bases)));
    });
}

criterion_group!(benches, bench_max, bench_dense, bench_engine);
criterion_main!(benches);
