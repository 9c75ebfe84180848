// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and rectangle types, and bounds computation.

/// A point stored in the tree.
///
/// Points are copied into leaves when the tree is built; the tree never refers back to
/// the caller's storage.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Caller-assigned identifier.
    pub id: i8,
    /// Caller-assigned rank. Carried through the tree, never interpreted.
    pub rank: i32,
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub const fn new(id: i8, rank: i32, x: f32, y: f32) -> Self {
        Self { id, rank, x, y }
    }
}

/// Axis-aligned rectangle given by its low (`lx`, `ly`) and high (`hx`, `hy`) corners.
///
/// `y` grows upwards: `ly` is the bottom edge and `hy` the top edge.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Minimum x (left)
    pub lx: f32,
    /// Minimum y (bottom)
    pub ly: f32,
    /// Maximum x (right)
    pub hx: f32,
    /// Maximum y (top)
    pub hy: f32,
}

impl Rect {
    /// Create a rectangle from its low and high corners.
    pub const fn new(lx: f32, ly: f32, hx: f32, hy: f32) -> Self {
        Self { lx, ly, hx, hy }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.hx - self.lx
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.hy - self.ly
    }

    /// Whether the point lies inside the rectangle, edges included.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.lx <= x && x <= self.hx && self.ly <= y && y <= self.hy
    }

    /// True if the rectangle is inverted, as returned by [`compute_bounds`] for no points.
    pub fn is_empty(&self) -> bool {
        self.hx < self.lx || self.hy < self.ly
    }
}

/// Compute the smallest rectangle enclosing every point, in a single pass.
///
/// For an empty slice this returns the inverted rectangle
/// `[f32::MAX, f32::MAX, -f32::MAX, -f32::MAX]`, for which [`Rect::is_empty`] is true.
/// Callers that need meaningful bounds must not pass an empty slice.
pub fn compute_bounds(points: &[Point]) -> Rect {
    let mut out = Rect::new(f32::MAX, f32::MAX, -f32::MAX, -f32::MAX);
    for p in points {
        if p.x < out.lx {
            out.lx = p.x;
        }
        if p.x > out.hx {
            out.hx = p.x;
        }
        if p.y < out.ly {
            out.ly = p.y;
        }
        if p.y > out.hy {
            out.hy = p.y;
        }
    }
    out
}

#[cfg(feature = "kurbo")]
mod kurbo_interop {
    use super::{Point, Rect};

    impl From<Rect> for kurbo::Rect {
        fn from(r: Rect) -> Self {
            Self::new(
                f64::from(r.lx),
                f64::from(r.ly),
                f64::from(r.hx),
                f64::from(r.hy),
            )
        }
    }

    impl From<kurbo::Rect> for Rect {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Coordinates are stored as f32; precision loss is accepted."
        )]
        fn from(r: kurbo::Rect) -> Self {
            let r = r.abs();
            Self::new(r.x0 as f32, r.y0 as f32, r.x1 as f32, r.y1 as f32)
        }
    }

    impl From<Point> for kurbo::Point {
        fn from(p: Point) -> Self {
            Self::new(f64::from(p.x), f64::from(p.y))
        }
    }
}
