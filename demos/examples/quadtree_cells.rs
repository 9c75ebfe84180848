// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree cells as Kurbo rectangles.
//!
//! Build a tree over a clustered point set and list every leaf cell as a `kurbo::Rect`,
//! together with its area share of the root.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_cells`

use kurbo::Shape;
use understory_quadtree::{Point, QuadTree, TreeConfig};

fn main() {
    let mut points = Vec::new();
    for (cx, cy) in [(-40.0_f32, -40.0_f32), (30.0, 10.0), (35.0, 45.0)] {
        for i in 0..60_i8 {
            let a = f32::from(i) * 0.7;
            let r = f32::from(i % 10);
            points.push(Point::new(i, 0, cx + r * a.cos(), cy + r * a.sin()));
        }
    }

    let config = TreeConfig::default().with_max_block_size(16);
    let tree = QuadTree::with_config(&points, config).expect("points are finite");
    let root: kurbo::Rect = tree.global_bounds().into();
    println!("root {root:?}, {} leaves", tree.leaves().count());

    for leaf in tree.leaves() {
        let cell: kurbo::Rect = tree.node_bounds(leaf).into();
        println!(
            "{:>6} depth {} {:>2} points, {:5.2}% of root",
            leaf.quad_key(),
            leaf.depth(),
            leaf.points().len(),
            100.0 * cell.area() / root.area()
        );
    }
}
