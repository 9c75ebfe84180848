// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The static quadtree: arena of nodes, recursive builder, and read-only accessors.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::config::TreeConfig;
use crate::error::{Error, Result};
use crate::quadkey::{
    Quadrant, cell_bounds, compute_children, compute_parent, compute_quad_key,
};
use crate::types::{Point, Rect, compute_bounds};

/// Handle of a node in a [`QuadTree`]'s arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
enum Kind {
    Leaf(Vec<Point>),
    Internal([Option<NodeId>; 4]),
}

/// A node of the tree: either a leaf owning points or an internal node with up to four
/// children.
#[derive(Clone, Debug)]
pub struct Node {
    quad_key: u64,
    depth: u8,
    kind: Kind,
}

impl Node {
    /// Quadkey of the cell this node covers.
    pub fn quad_key(&self) -> u64 {
        self.quad_key
    }

    /// Depth of this node; the root is at depth 0.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Whether this node holds points rather than children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, Kind::Leaf(_))
    }

    /// Points stored in this node. Empty for internal nodes.
    pub fn points(&self) -> &[Point] {
        match &self.kind {
            Kind::Leaf(points) => points,
            Kind::Internal(_) => &[],
        }
    }

    /// Child slots in [`Quadrant`] order. All `None` for leaves.
    pub fn children(&self) -> [Option<NodeId>; 4] {
        match self.kind {
            Kind::Leaf(_) => [None; 4],
            Kind::Internal(children) => children,
        }
    }

    /// Child in the given quadrant, if that quadrant received any points.
    pub fn child(&self, quadrant: Quadrant) -> Option<NodeId> {
        self.children()[quadrant.index()]
    }
}

/// A static point quadtree keyed by quadkeys.
///
/// Built once from a slice of points and read-only afterwards. Nodes live in an arena and
/// refer to their children by [`NodeId`]; empty quadrants have no node at all.
#[derive(Clone)]
pub struct QuadTree {
    config: TreeConfig,
    bounds: Rect,
    root: Option<NodeId>,
    arena: Vec<Node>,
    len: usize,
}

impl QuadTree {
    /// Build a tree over `points` with the default [`TreeConfig`].
    pub fn new(points: &[Point]) -> Result<Self> {
        Self::with_config(points, TreeConfig::default())
    }

    /// Build a tree over `points` with the given thresholds.
    ///
    /// `config` is [clamped](TreeConfig::clamped) first, so the tree never splits below
    /// [`MAX_DEPTH`](crate::MAX_DEPTH) and every leaf may hold at least one point.
    ///
    /// An empty slice yields an empty tree with default bounds. Every split re-derives each
    /// point's parent from its child key; if that parent is not the node being split,
    /// construction stops with [`Error::BucketingInconsistency`] and no tree is returned.
    pub fn with_config(points: &[Point], config: TreeConfig) -> Result<Self> {
        let mut tree = Self {
            config: config.clamped(),
            bounds: Rect::default(),
            root: None,
            arena: Vec::new(),
            len: points.len(),
        };
        let Some(first) = points.first() else {
            return Ok(tree);
        };

        tree.bounds = compute_bounds(points);
        let root_key = compute_quad_key(first, 0, &tree.bounds);
        let refs: Vec<&Point> = points.iter().collect();
        tree.root = tree.build(root_key, refs, 0)?;

        log::debug!(
            "built quadtree: {} points, {} nodes, max depth {}",
            tree.len,
            tree.arena.len(),
            tree.max_depth()
        );
        Ok(tree)
    }

    /// Create the node for `quad_key` at `depth` and fill it from `points`.
    fn build(&mut self, quad_key: u64, points: Vec<&Point>, depth: u8) -> Result<Option<NodeId>> {
        if points.is_empty() {
            return Ok(None);
        }

        let idx = NodeId::new(self.arena.len());

        if points.len() <= self.config.max_block_size || depth >= self.config.max_depth {
            if points.len() > self.config.max_block_size {
                log::warn!(
                    "leaf {quad_key:#x} at depth {depth} holds {} points, above the block size of {}",
                    points.len(),
                    self.config.max_block_size
                );
            }
            let data = points.into_iter().copied().collect();
            self.arena.push(Node {
                quad_key,
                depth,
                kind: Kind::Leaf(data),
            });
            return Ok(Some(idx));
        }

        self.arena.push(Node {
            quad_key,
            depth,
            kind: Kind::Internal([None; 4]),
        });

        let children = compute_children(quad_key)?;
        let mut buckets: [Vec<&Point>; 4] = core::array::from_fn(|_| Vec::new());
        for p in points {
            let child = compute_quad_key(p, depth + 1, &self.bounds);
            let parent = compute_parent(child)?;
            if parent != quad_key {
                return Err(Error::BucketingInconsistency {
                    point_id: p.id,
                    child,
                    parent,
                    node: quad_key,
                });
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "The parent check above bounds the difference to 0..4."
            )]
            let bucket = (child - children[0]) as usize;
            buckets[bucket].push(p);
        }

        log::trace!(
            "split {quad_key:#x} at depth {depth}: {:?}",
            buckets.each_ref().map(Vec::len)
        );

        let mut slots = [None; 4];
        for ((slot, key), bucket) in slots.iter_mut().zip(children).zip(buckets) {
            *slot = self.build(key, bucket, depth + 1)?;
        }
        self.arena[idx.get()].kind = Kind::Internal(slots);
        Ok(Some(idx))
    }

    /// Bounds of all points, computed once at construction. All zero for an empty tree.
    pub fn global_bounds(&self) -> Rect {
        self.bounds
    }

    /// Thresholds the tree was built with.
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Depth of the deepest node.
    ///
    /// A tree whose root is a single leaf has depth 0. An empty tree also reports 0; use
    /// [`QuadTree::is_empty`] to tell the two apart.
    pub fn max_depth(&self) -> u8 {
        u8::try_from(self.max_depth_recursive(self.root)).unwrap_or(0)
    }

    // Absent children count as -1, so a leaf is at 0 relative to itself.
    fn max_depth_recursive(&self, node: Option<NodeId>) -> i8 {
        let Some(id) = node else {
            return -1;
        };
        let deepest = self
            .node(id)
            .children()
            .into_iter()
            .map(|child| self.max_depth_recursive(child))
            .max()
            .unwrap_or(-1);
        1 + deepest
    }

    /// Root node, absent for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to a different tree and is out of range for this one.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id.get()]
    }

    /// Find the node whose quadkey is `quad_key`, walking down from the root along the
    /// key's path.
    pub fn find(&self, quad_key: u64) -> Option<&Node> {
        let depth = crate::quadkey::depth_of(quad_key).ok()?;
        let mut node = self.node(self.root?);
        while node.depth < depth {
            let shift = 2 * u32::from(depth - node.depth - 1);
            let next = node.child(Quadrant::of(quad_key >> shift))?;
            node = self.node(next);
        }
        (node.quad_key == quad_key).then_some(node)
    }

    /// Rectangle covered by `node`.
    pub fn node_bounds(&self, node: &Node) -> Rect {
        // Keys in the arena were produced by the codec and are always valid.
        cell_bounds(node.quad_key, &self.bounds).unwrap_or(self.bounds)
    }

    /// Iterate over all leaves, in arena order.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> + '_ {
        self.arena.iter().filter(|n| n.is_leaf())
    }

    /// Number of points stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the tree was built from no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes, leaves and internal nodes together.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}

impl Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("points", &self.len)
            .field("arena_nodes", &self.arena.len())
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}
