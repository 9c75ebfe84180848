// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadkey walk.
//!
//! Encode one point at every depth, then climb back to the root with the codec alone,
//! printing each cell's column, row and rectangle along the way.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadkey_walk`

use understory_quadtree::quadkey::{
    cell_bounds, cell_of, compute_children, compute_parent, compute_quad_key, depth_of,
};
use understory_quadtree::{Point, Quadrant, Rect};

fn main() {
    let bounds = Rect::new(-16.0, -16.0, 16.0, 16.0);
    let p = Point::new(83, 12623, 5.880_062, -11.128_269);

    let mut key = compute_quad_key(&p, 6, &bounds);
    println!("point {:?} at depth 6 -> {key}", (p.x, p.y));

    loop {
        let depth = depth_of(key).expect("codec keys are valid");
        let (col, row) = cell_of(key).expect("codec keys are valid");
        let cell = cell_bounds(key, &bounds).expect("codec keys are valid");
        println!("  depth {depth}: key {key:>5} col {col:>2} row {row:>2} {cell:?}");
        match compute_parent(key) {
            Ok(parent) => {
                let siblings = compute_children(parent).expect("parent is shallower than key");
                debug_assert_eq!(siblings[Quadrant::of(key).index()], key, "key is its parent's child");
                key = parent;
            }
            Err(e) => {
                println!("  stop: {e}");
                break;
            }
        }
    }
}
