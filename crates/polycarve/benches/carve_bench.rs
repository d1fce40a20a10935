//! Criterion benchmarks for polygon carving.
//! Focus sizes: ring vertices n in {8, 32, 128, 512}, cut lines with 16 interior points.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p polycarve

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polycarve::carve::rand::{
    draw_cut_line, draw_ring_radial, CutCfg, ReplayToken, RingCfg, VertexCount,
};
use polycarve::carve::{carve_with, find_all_intersections, CarveCfg, Point};

fn sampled(n: usize, seed: u64) -> (Vec<Point>, Vec<Point>) {
    let tok = ReplayToken { seed, index: 0 };
    let ring = draw_ring_radial(
        RingCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RingCfg::default()
        },
        tok,
    );
    let line = draw_cut_line(
        CutCfg {
            interior_points: 16,
            ..CutCfg::default()
        },
        tok,
    );
    (ring, line)
}

fn bench_carve(c: &mut Criterion) {
    let mut group = c.benchmark_group("carve");
    let cfg = CarveCfg::default();
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("scan", n), &n, |b, &n| {
            b.iter_batched(
                || sampled(n, 43),
                |(ring, line)| {
                    let _hits = find_all_intersections(&ring, &line, cfg.eps);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("carve", n), &n, |b, &n| {
            b.iter_batched(
                || sampled(n, 44),
                |(ring, line)| {
                    let _out = carve_with(&ring, &line, cfg).into_vec();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_carve);
criterion_main!(benches);
