//! Criterion benchmarks for ellipse queries.
//!
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ellipse::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Vec2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vec2::new(rng.gen_range(-15.0..15.0), rng.gen_range(-15.0..15.0)))
        .collect()
}

fn bench_queries(c: &mut Criterion) {
    let cfg = EllipseCfg::default();
    let ellipses = draw_ellipses(&cfg, ReplayToken { seed: 11, index: 0 }, 64);
    let points = random_points(1024, 12);

    let mut group = c.benchmark_group("ellipse");
    group.bench_function("contains", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for e in &ellipses {
                for p in &points {
                    hits += e.contains(black_box(p.x), black_box(p.y)) as usize;
                }
            }
            hits
        })
    });
    group.bench_function("evaluate_parametric", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for e in &ellipses {
                for k in 0..64 {
                    let (x, y) = e.evaluate_parametric(black_box(k as f64 * 0.1));
                    acc += x + y;
                }
            }
            acc
        })
    });
    group.bench_function("bounding_box", |b| {
        b.iter(|| {
            ellipses
                .iter()
                .map(|e| black_box(e).bounding_box().width())
                .sum::<f64>()
        })
    });
    for &n in &[64usize, 1024, 16384] {
        group.bench_with_input(BenchmarkId::new("sampled_bounds", n), &n, |b, &n| {
            b.iter(|| black_box(ellipses[0].sampled_bounds(n)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
