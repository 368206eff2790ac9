//! Foundation types shared by every rasterizer.
//!
//! Integer grid points, the rounding primitive used when snapping polygon
//! vertices to cells, and a few angle helpers.

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

// ============================================================================
// Rounding
// ============================================================================

/// Round a double to the nearest integer (round half away from zero).
///
/// Every vertex that is snapped to the grid goes through this function so
/// that output is reproducible across callers.
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

// ============================================================================
// Angles
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

// ============================================================================
// Point
// ============================================================================

/// A cell coordinate on the grid.
///
/// Points are plain values: rasterizers copy them into their own working
/// state, so a caller's point is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (chessboard) distance to `other`.
    pub fn chebyshev(&self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// True if `other` is one of the 8 cells surrounding this one.
    pub fn is_8_neighbor(&self, other: Point) -> bool {
        self.chebyshev(other) == 1
    }

    /// The 4-connected neighbors in up, down, right, left order.
    pub fn neighbors4(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y - 1),
            Point::new(self.x, self.y + 1),
            Point::new(self.x + 1, self.y),
            Point::new(self.x - 1, self.y),
        ]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ============================================================================
// Tests
// ============================================================================
