// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Point, QuadTree};

use rstar::RTree;

fn gen_grid_points(n: usize, cell: f32) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(
                (x % 128) as i8,
                (y * n + x) as i32,
                x as f32 * cell,
                y as f32 * cell,
            ));
        }
    }
    out
}

fn to_rstar_points(v: &[Point]) -> Vec<[f32; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_build_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_external_compare_f32");
    for &n in &[128usize, 512] {
        let points = gen_grid_points(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_quadtree_build_n{}", n), |b| {
            b.iter(|| {
                let tree = QuadTree::new(black_box(&points)).unwrap();
                black_box(tree.node_count());
            })
        });

        group.bench_function(format!("rstar_bulk_load_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    black_box(tree.size());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_external_compare);
criterion_main!(benches);
