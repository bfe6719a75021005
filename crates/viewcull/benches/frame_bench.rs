//! Criterion benchmarks for the per-frame visibility pipeline.
//! Focus sizes: polygons in {10, 50, 200}; occlusion is quadratic in this count.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use viewcull::geom2::rand::{draw_scene, SceneCfg};
use viewcull::visibility::{build_frame, ViewCfg};

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let cfg = ViewCfg::default();
    for &m in &[10usize, 50, 200] {
        let scene = draw_scene(
            SceneCfg {
                polygons: m,
                ..SceneCfg::default()
            },
            44,
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("build_frame", m), &scene, |b, scene| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| {
                let frame = build_frame(scene, false, &cfg, &mut rng);
                frame.visible_count()
            })
        });
        group.bench_with_input(BenchmarkId::new("build_frame_overlay", m), &scene, |b, scene| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| build_frame(scene, true, &cfg, &mut rng).outlines.len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
