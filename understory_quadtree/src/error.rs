// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the quadkey codec and the tree builder.

/// Errors reported by the quadkey codec and by [`QuadTree`](crate::QuadTree) construction.
///
/// None of these are recoverable where they are detected; they propagate to the caller
/// unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key is zero or has bits set above the sign bit.
    #[error("invalid quadkey {0:#x}")]
    InvalidKey(u64),
    /// Children were requested for a key whose children would lie below the depth limit.
    #[error("quadkey {key:#x} at depth {depth} cannot be subdivided further")]
    DepthExceeded {
        /// The key that was asked for children.
        key: u64,
        /// Depth of `key`.
        depth: u8,
    },
    /// The parent of the root key was requested.
    #[error("the root quadkey has no parent")]
    NoParent,
    /// A point was assigned to a child whose parent is not the node being split.
    #[error(
        "point {point_id} was bucketed into {child:#x} (parent {parent:#x}) while splitting node {node:#x}"
    )]
    BucketingInconsistency {
        /// Identifier of the offending point.
        point_id: i8,
        /// Quadkey computed for the point one level below `node`.
        child: u64,
        /// Parent derived from `child`.
        parent: u64,
        /// Quadkey of the node being split.
        node: u64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
