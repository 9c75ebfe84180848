// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build configuration for [`QuadTree`](crate::QuadTree).

use crate::quadkey::MAX_DEPTH;

/// Default number of points a leaf may hold before it is split.
pub const MAX_BLOCK_SIZE: usize = 1000;

/// Thresholds controlling when the builder stops subdividing.
///
/// A node becomes a leaf once it holds at most `max_block_size` points or sits at
/// `max_depth`, whichever comes first. Leaves at `max_depth` may exceed the block size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// Largest point count a leaf holds before it is split. At least 1.
    pub max_block_size: usize,
    /// Depth at which nodes are always leaves. At most [`MAX_DEPTH`].
    pub max_depth: u8,
}

impl TreeConfig {
    const fn default_max_block_size() -> usize {
        MAX_BLOCK_SIZE
    }

    const fn default_max_depth() -> u8 {
        MAX_DEPTH
    }

    /// Set the leaf split threshold. Values below 1 are raised to 1.
    pub const fn with_max_block_size(mut self, max_block_size: usize) -> Self {
        self.max_block_size = if max_block_size == 0 { 1 } else { max_block_size };
        self
    }

    /// Set the depth at which nodes stop splitting. Values above [`MAX_DEPTH`] are lowered to it.
    pub const fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = if max_depth > MAX_DEPTH { MAX_DEPTH } else { max_depth };
        self
    }

    /// This configuration with both limits brought into range, as the builder methods do.
    ///
    /// The fields are public, so a struct literal can hold any value; the tree applies this
    /// before building.
    pub const fn clamped(self) -> Self {
        self.with_max_block_size(self.max_block_size)
            .with_max_depth(self.max_depth)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_block_size: Self::default_max_block_size(),
            max_depth: Self::default_max_depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = TreeConfig::default();
        assert_eq!(c.max_block_size, 1000);
        assert_eq!(c.max_depth, 31);
    }

    #[test]
    fn builders_clamp() {
        let c = TreeConfig::default()
            .with_max_block_size(0)
            .with_max_depth(200);
        assert_eq!(c.max_block_size, 1);
        assert_eq!(c.max_depth, MAX_DEPTH);

        let c = TreeConfig::default()
            .with_max_block_size(16)
            .with_max_depth(4);
        assert_eq!(c, TreeConfig {
            max_block_size: 16,
            max_depth: 4,
        });
    }

    #[test]
    fn struct_literals_are_clamped() {
        let c = TreeConfig {
            max_block_size: 0,
            max_depth: 40,
        };
        assert_eq!(c.clamped(), TreeConfig {
            max_block_size: 1,
            max_depth: MAX_DEPTH,
        });
        let ok = TreeConfig::default().with_max_depth(7);
        assert_eq!(ok.clamped(), ok);
    }
}
