use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use skyline::{compute_skyline, Building, IndexedMaxHeap};

fn random_buildings(count: usize) -> Vec<Building> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|id| {
            let left: i64 = rng.gen_range(0..100_000);
            let right = left + rng.gen_range(1..2_000);
            Building::new(left, rng.gen_range(0..1_000), right, id)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let buildings = random_buildings(10_000);
    c.bench_function("sweep 10k buildings", |b| {
        b.iter(|| compute_skyline(black_box(&buildings)))
    });

    let mut heap: IndexedMaxHeap<i64> = IndexedMaxHeap::new(1023);
    c.bench_function("heap insert/remove", |b| {
        b.iter(|| {
            let mut rng = rand::thread_rng();
            let label = rng.gen_range(0..1024);
            if heap.contains(label) {
                black_box(heap.remove(label).ok());
            } else {
                black_box(heap.insert(rng.gen::<i64>() % 1000, label).ok());
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
