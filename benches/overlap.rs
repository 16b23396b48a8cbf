use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use tri::geom::isect::{Intersect, tri_tri_overlap};
use tritri_benches::{Pair, coplanar, crossing, rng, separated};

const N: usize = 1000;

fn bench_pairs(c: &mut Criterion, name: &str, pairs: &[Pair]) {
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("overlap", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter(|(t, u)| tri_tri_overlap(black_box(t), black_box(u)))
                .count()
        })
    });
    group.bench_function("intersect", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter_map(|(t, u)| black_box(t).intersect(black_box(u)))
                .count()
        })
    });
    group.finish();
}

fn hit(c: &mut Criterion) {
    bench_pairs(c, "hit", &crossing(&mut rng(), N));
}

fn miss(c: &mut Criterion) {
    bench_pairs(c, "miss", &separated(&mut rng(), N));
}

fn coplanar_mixed(c: &mut Criterion) {
    bench_pairs(c, "coplanar", &coplanar(&mut rng(), N));
}

criterion_group!(benches, hit, miss, coplanar_mixed);
criterion_main!(benches);
