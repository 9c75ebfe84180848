// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::quadkey::{compute_parent, compute_quad_key};
use understory_quadtree::{Point, QuadTree, Rect, TreeConfig};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

fn gen_uniform_points(count: usize, extent: f32) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| {
            Point::new(
                i as i8,
                i as i32,
                rng.next_f32() * extent,
                rng.next_f32() * extent,
            )
        })
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f32) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f32() * 2000.0, rng.next_f32() * 2000.0));
    }
    for (cx, cy) in centers {
        for i in 0..per_cluster {
            let dx = (rng.next_f32() - 0.5) * spread;
            let dy = (rng.next_f32() - 0.5) * spread;
            out.push(Point::new(i as i8, i as i32, cx + dx, cy + dy));
        }
    }
    out
}

fn bench_build_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_uniform");
    for &n in &[16_000usize, 128_000, 1_000_000] {
        let points = gen_uniform_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("default_n{}", n), |b| {
            b.iter(|| {
                let tree = QuadTree::new(black_box(&points)).unwrap();
                black_box(tree.max_depth());
            })
        });
        group.bench_function(format!("block64_n{}", n), |b| {
            b.iter_batched(
                || TreeConfig::default().with_max_block_size(64),
                |config| {
                    let tree = QuadTree::with_config(black_box(&points), config).unwrap();
                    black_box(tree.node_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_build_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_clustered");
    for &spread in &[1.0f32, 50.0] {
        let points = gen_clustered_points(32, 4000, spread);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("spread{}", spread), |b| {
            b.iter(|| {
                let tree = QuadTree::new(black_box(&points)).unwrap();
                black_box(tree.max_depth());
            })
        });
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let points = gen_uniform_points(4096, 1000.0);
    let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &depth in &[1u8, 16, 31] {
        group.bench_function(format!("quad_key_and_parent_d{}", depth), |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for p in &points {
                    let k = compute_quad_key(p, depth, &bounds);
                    acc ^= compute_parent(k).unwrap_or(k);
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build_uniform,
    bench_build_clustered,
    bench_codec
);
criterion_main!(benches);
