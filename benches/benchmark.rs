use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_core::{AvlTreeMap, AvlTreeSet};

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("map_add", |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for value in &values {
                map.add(*value, *value);
            }
            map
        })
    });

    c.bench_function("map_insert", |b| {
        let mut map = AvlTreeMap::new();
        b.iter(|| {
            for value in &values {
                map.insert(*value, *value);
            }
        })
    });

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, *value);
    }

    c.bench_function("map_find", |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.find(value));
            }
        })
    });

    c.bench_function("map_in_order", |b| {
        b.iter(|| {
            for (k, v) in map.in_order_traversal() {
                black_box((k, v));
            }
        })
    });

    c.bench_function("map_reverse_in_order", |b| {
        b.iter(|| {
            for (k, v) in map.reverse_in_order_traversal() {
                black_box((k, v));
            }
        })
    });

    c.bench_function("map_remove", |b| {
        b.iter(|| {
            let mut map = map.clone();
            for value in &values {
                map.remove(value);
            }
            map
        })
    });

    c.bench_function("set_insert", |b| {
        b.iter(|| {
            let mut set = AvlTreeSet::new();
            for value in &values {
                set.insert(*value);
            }
            set
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
