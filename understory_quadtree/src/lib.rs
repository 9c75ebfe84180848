// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a static 2D point quadtree keyed by Z-order quadkeys.
//!
//! Understory Quadtree groups spatially close points into the same leaf.
//!
//! - Build once from a batch of points; the tree is read-only afterwards.
//! - Each node is identified by a 64-bit quadkey that encodes both its depth and its path
//!   from the root along a Z-order (Morton) curve.
//! - Nodes split into four quadrants until they hold at most [`MAX_BLOCK_SIZE`] points or
//!   reach [`MAX_DEPTH`]. Empty quadrants get no node.
//!
//! The [`quadkey`] codec is usable on its own: given a key you can compute its parent,
//! children, depth, and cell rectangle without a tree, which is what a query layer needs
//! to walk the hierarchy.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Point, QuadTree, Rect, quadkey};
//!
//! let points = [
//!     Point::new(0, 0, -16.0, -16.0),
//!     Point::new(1, 0, 4.0, -3.0),
//!     Point::new(2, 0, 16.0, 16.0),
//! ];
//! let tree = QuadTree::new(&points).unwrap();
//! assert_eq!(tree.global_bounds(), Rect::new(-16.0, -16.0, 16.0, 16.0));
//! assert_eq!(tree.max_depth(), 0);
//!
//! // Midlines belong to the upper/right quadrant.
//! let k = quadkey::compute_quad_key(&Point::new(3, 0, 0.0, 0.0), 1, &tree.global_bounds());
//! assert_eq!(k, 7);
//! assert_eq!(quadkey::compute_parent(k), Ok(1));
//! assert_eq!(quadkey::compute_children(1), Ok([4, 5, 6, 7]));
//! ```
//!
//! Splitting thresholds can be tuned per tree:
//!
//! ```rust
//! use understory_quadtree::{Point, QuadTree, TreeConfig};
//!
//! let points: Vec<Point> = (0..64)
//!     .map(|i| Point::new(i, 0, f32::from(i % 8), f32::from(i / 8)))
//!     .collect();
//! let config = TreeConfig::default().with_max_block_size(4);
//! let tree = QuadTree::with_config(&points, config).unwrap();
//! assert!(tree.leaves().all(|leaf| leaf.points().len() <= 4));
//! ```
//!
//! ## Boundaries and float semantics
//!
//! Coordinates are `f32`. A coordinate exactly on a cell edge belongs to the cell above or
//! to the right of it; the outer upper and right edges belong to the last cell.
//! Non-finite coordinates are not meaningful; NaN coordinates end up in the lower-left cell
//! at every depth.
//!
//! ## Logging
//!
//! Construction reports through the [`log`] facade: a `debug` summary per tree, a `trace`
//! line per split, and a `warn` for leaves that exceed the block size at the depth limit.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod quadkey;
pub mod tree;
pub mod types;

pub use config::{MAX_BLOCK_SIZE, TreeConfig};
pub use error::{Error, Result};
pub use quadkey::{MAX_DEPTH, Quadrant};
pub use tree::{Node, NodeId, QuadTree};
pub use types::{Point, Rect, compute_bounds};
