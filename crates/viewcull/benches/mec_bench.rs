//! Criterion benchmarks for the minimum enclosing circle.
//! Focus sizes: n in {3, 10, 100, 1000} vertices.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use viewcull::geom2::{Polygon, Vertex};
use viewcull::mec::bounding_circle_with_rng;

fn random_cloud(n: usize, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vertex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect::<Vec<_>>()
        .into()
}

fn bench_mec(c: &mut Criterion) {
    let mut group = c.benchmark_group("mec");
    for &n in &[3usize, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("bounding_circle", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter_batched(
                || random_cloud(n, 43),
                |poly| {
                    let _c = bounding_circle_with_rng(&poly, &mut rng);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mec);
criterion_main!(benches);
