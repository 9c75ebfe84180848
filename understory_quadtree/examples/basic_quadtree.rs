// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: build a tree, inspect its leaves, and look a node up
//! by quadkey.

use understory_quadtree::{Point, QuadTree, TreeConfig};

fn main() {
    let points: Vec<Point> = (0..100_i8)
        .map(|i| {
            let t = f32::from(i);
            Point::new(i, i32::from(i) * 10, (t * 0.37).sin() * 50.0, t)
        })
        .collect();

    let config = TreeConfig::default().with_max_block_size(10);
    let tree = QuadTree::with_config(&points, config).expect("points are finite");
    println!(
        "bounds={:?} nodes={} max_depth={}",
        tree.global_bounds(),
        tree.node_count(),
        tree.max_depth()
    );

    for leaf in tree.leaves() {
        println!(
            "leaf {:>4} depth={} points={:>2} cell={:?}",
            leaf.quad_key(),
            leaf.depth(),
            leaf.points().len(),
            tree.node_bounds(leaf)
        );
    }

    if let Some(node) = tree.find(5) {
        println!("node 5 is a leaf: {}", node.is_leaf());
    }
}
