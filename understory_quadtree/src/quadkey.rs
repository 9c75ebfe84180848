// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadkey codec: Z-order identifiers for quadtree cells.
//!
//! A quadkey is a `u64` holding the path from the root to a cell as `2 * depth`
//! interleaved bits, topped by a single depth marker bit at position `2 * depth`:
//!
//! ```text
//! depth 0:            1
//! depth 1:          1 yx
//! depth 2:       1 yx yx
//! ```
//!
//! Within each pair the low bit selects the x half and the high bit the y half, so the
//! children of a key `k` are `4k`, `4k + 1`, `4k + 2`, `4k + 3` (lower-left, lower-right,
//! upper-left, upper-right), and every cell at depth `d` lies in
//! [`min_id(d)`](min_id)`..=`[`max_id(d)`](max_id).
//!
//! These functions are stateless and do not need a [`QuadTree`](crate::QuadTree); a query
//! layer can use them to walk the implicit hierarchy directly.

use crate::error::{Error, Result};
use crate::types::{Point, Rect};

/// Deepest level a quadkey can describe.
pub const MAX_DEPTH: u8 = 31;

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;

// In f32 this rounds up to 2^32, so a coordinate on a midline lands exactly on the first
// integer of the upper half.
#[allow(
    clippy::cast_precision_loss,
    reason = "The rounding to 2^32 is what places boundary coordinates in the upper cell."
)]
const INTEGER_SPACE: f32 = u32::MAX as f32;

bitflags::bitflags! {
    /// Position of a cell within its parent, as encoded in the two lowest bits of its key.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Quadrant: u8 {
        /// Cell is in the upper x half of its parent.
        const EAST  = 0b01;
        /// Cell is in the upper y half of its parent.
        const NORTH = 0b10;
    }
}

impl Quadrant {
    /// Child slot 0.
    pub const LOWER_LEFT: Self = Self::empty();
    /// Child slot 1.
    pub const LOWER_RIGHT: Self = Self::EAST;
    /// Child slot 2.
    pub const UPPER_LEFT: Self = Self::NORTH;
    /// Child slot 3.
    pub const UPPER_RIGHT: Self = Self::EAST.union(Self::NORTH);

    /// All four quadrants in child-slot order.
    pub const ALL: [Self; 4] = [
        Self::LOWER_LEFT,
        Self::LOWER_RIGHT,
        Self::UPPER_LEFT,
        Self::UPPER_RIGHT,
    ];

    /// The quadrant a key occupies within its parent.
    ///
    /// Meaningless for the root key, which has no parent.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The value is masked to two bits first."
    )]
    pub const fn of(key: u64) -> Self {
        Self::from_bits_truncate((key & 0b11) as u8)
    }

    /// Index of this quadrant in a `[_; 4]` child array.
    pub const fn index(self) -> usize {
        self.bits() as usize
    }
}

/// Spread the bits of `x` onto the even bit positions of a `u64`.
pub const fn spread_by_1_bit(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Gather the even bit positions of `x` into a `u32`. Inverse of [`spread_by_1_bit`].
#[allow(
    clippy::cast_possible_truncation,
    reason = "Only the low 32 bits are populated after the final mask."
)]
pub const fn compact_by_1_bit(x: u64) -> u32 {
    let mut x = x & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
    x = (x | (x >> 16)) & 0x0000_0000_ffff_ffff;
    x as u32
}

/// Smallest key at `depth`: the depth marker alone.
pub const fn min_id(depth: u8) -> u64 {
    debug_assert!(depth <= MAX_DEPTH, "depth is beyond MAX_DEPTH");
    1 << (2 * depth as u32)
}

/// Largest key at `depth`: the depth marker with every path bit set.
pub const fn max_id(depth: u8) -> u64 {
    let marker = min_id(depth);
    marker | (marker - 1)
}

/// True for keys in `(0, 0x8000_0000_0000_0000]`.
pub const fn is_valid(key: u64) -> bool {
    key != 0 && key <= SIGN_BIT
}

/// Number of cells along each axis at `depth`; 0 beyond [`MAX_DEPTH`].
pub const fn cells_per_axis(depth: u8) -> u32 {
    if depth > MAX_DEPTH { 0 } else { 1 << depth }
}

/// Depth encoded in `key`, found from the position of its highest set bit.
pub fn depth_of(key: u64) -> Result<u8> {
    if !is_valid(key) {
        return Err(Error::InvalidKey(key));
    }
    Ok(msb(key) / 2)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "A bit index of a u64 always fits in u8."
)]
const fn msb(key: u64) -> u8 {
    (63 - key.leading_zeros()) as u8
}

/// Key of the cell containing `p` at `depth`, within `bounds`.
///
/// `p` is expected to lie inside `bounds` and `depth` to be at most [`MAX_DEPTH`].
/// Coordinates on a cell's upper or right edge belong to the next cell up or right;
/// the upper and right edges of `bounds` itself belong to the last cell.
pub fn compute_quad_key(p: &Point, depth: u8, bounds: &Rect) -> u64 {
    debug_assert!(depth <= MAX_DEPTH, "depth is beyond MAX_DEPTH");

    let percent_x = (p.x - bounds.lx) / (bounds.hx - bounds.lx);
    let percent_y = (p.y - bounds.ly) / (bounds.hy - bounds.ly);

    let xi = scale_to_integer_space(percent_x);
    let yi = scale_to_integer_space(percent_y);

    let mut morton = spread_by_1_bit(xi) | (spread_by_1_bit(yi) << 1);

    // The top y bit is carried separately so the shift below never sees the sign bit.
    let chopped = morton & SIGN_BIT != 0;
    morton &= !SIGN_BIT;

    let shift = if depth == 0 { 63 } else { 64 - 2 * u32::from(depth) };
    let mut key = (morton >> shift) | min_id(depth);

    if chopped && depth != 0 {
        key |= 1 << (2 * u32::from(depth) - 1);
    }

    key
}

// Negative and NaN inputs saturate to 0; overshoot past 1.0 clamps to u32::MAX.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Saturating float to integer conversion is the intended clamping."
)]
fn scale_to_integer_space(percent: f32) -> u32 {
    let scaled = (percent * INTEGER_SPACE) as u64;
    scaled.min(u64::from(u32::MAX)) as u32
}

/// The four children of `parent`, in [`Quadrant`] order.
///
/// Fails with [`Error::InvalidKey`] for an invalid parent and with
/// [`Error::DepthExceeded`] when the children would be deeper than [`MAX_DEPTH`].
pub fn compute_children(parent: u64) -> Result<[u64; 4]> {
    if !is_valid(parent) {
        return Err(Error::InvalidKey(parent));
    }
    if parent > max_id(MAX_DEPTH - 1) {
        return Err(Error::DepthExceeded {
            key: parent,
            depth: msb(parent) / 2,
        });
    }
    let first = parent << 2;
    Ok([first, first + 1, first + 2, first + 3])
}

/// Parent of `child`.
///
/// Fails with [`Error::InvalidKey`] for an invalid key and with [`Error::NoParent`] for the
/// root key.
pub fn compute_parent(child: u64) -> Result<u64> {
    if !is_valid(child) {
        return Err(Error::InvalidKey(child));
    }
    if child == min_id(0) {
        return Err(Error::NoParent);
    }
    Ok((child & !SIGN_BIT) >> 2)
}

/// Column and row of the cell `key` names, counted from the lower-left cell at its depth.
pub fn cell_of(key: u64) -> Result<(u32, u32)> {
    let depth = depth_of(key)?;
    let path = key - min_id(depth);
    Ok((compact_by_1_bit(path), compact_by_1_bit(path >> 1)))
}

/// Rectangle covered by the cell `key` names, when the root cell is `bounds`.
pub fn cell_bounds(key: u64, bounds: &Rect) -> Result<Rect> {
    let depth = depth_of(key)?;
    let (col, row) = cell_of(key)?;
    #[allow(
        clippy::cast_precision_loss,
        reason = "Cell counts above 2^24 only lose precision the f32 bounds cannot express anyway."
    )]
    let (n, col, row) = (
        cells_per_axis(depth) as f32,
        col as f32,
        row as f32,
    );
    let w = bounds.width() / n;
    let h = bounds.height() / n;
    Ok(Rect::new(
        bounds.lx + col * w,
        bounds.ly + row * h,
        bounds.lx + (col + 1.0) * w,
        bounds.ly + (row + 1.0) * h,
    ))
}
