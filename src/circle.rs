//! Midpoint circle rasterizer.
//!
//! Walks the first octant of a circle (from `(0, r)` until `x > y`) with an
//! integer decision variable and mirrors every step into the other seven
//! octants. The decision variable is kept multiplied by 4 so the classic
//! `(5 - 4r) / 4` start value needs no fractions; only its sign is ever
//! tested, so the walk is identical.

use crate::basics::Point;
use crate::error::Result;
use crate::grid::Grid;
use crate::painter::Painter;

// ============================================================================
// MidpointCircle
// ============================================================================

/// First-octant walk of a circle of the given radius.
///
/// Yields `(x, y)` offsets from the center with `0 <= x <= y`, starting at
/// `(0, radius)`.
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    x: i32,
    y: i32,
    d: i64,
}

impl MidpointCircle {
    pub fn new(radius: i32) -> Self {
        Self {
            x: 0,
            y: radius,
            d: 5 - 4 * i64::from(radius),
        }
    }

    /// Radius used for a circle of `diameter` cells (floored half).
    pub fn radius_for(diameter: u32) -> i32 {
        (diameter / 2) as i32
    }
}

impl Iterator for MidpointCircle {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x > self.y {
            return None;
        }
        let step = (self.x, self.y);

        if self.d < 0 {
            self.d += 4 * (2 * i64::from(self.x) + 1);
        } else {
            self.d += 4 * (2 * (i64::from(self.x) - i64::from(self.y)) + 1);
            self.y -= 1;
        }
        self.x += 1;

        Some(step)
    }
}

// ============================================================================
// CirclePoints
// ============================================================================

/// All cells of a circle outline, eight per octant step.
///
/// Cells on the axes and on the diagonals come out more than once; they are
/// not filtered.
#[derive(Debug, Clone)]
pub struct CirclePoints {
    center: Point,
    octant: MidpointCircle,
    pending: [Point; 8],
    next: usize,
}

impl CirclePoints {
    pub fn new(center: Point, diameter: u32) -> Self {
        Self {
            center,
            octant: MidpointCircle::new(MidpointCircle::radius_for(diameter)),
            pending: [center; 8],
            next: 8,
        }
    }

    fn mirror(&mut self, x: i32, y: i32) {
        let Point { x: cx, y: cy } = self.center;
        self.pending = [
            Point::new(cx + x, cy + y),
            Point::new(cx + x, cy - y),
            Point::new(cx - x, cy + y),
            Point::new(cx - x, cy - y),
            Point::new(cx + y, cy + x),
            Point::new(cx + y, cy - x),
            Point::new(cx - y, cy + x),
            Point::new(cx - y, cy - x),
        ];
        self.next = 0;
    }
}

impl Iterator for CirclePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next == 8 {
            let (x, y) = self.octant.next()?;
            self.mirror(x, y);
        }
        let p = self.pending[self.next];
        self.next += 1;
        Some(p)
    }
}

/// Cells of the outline of a circle of `diameter` centered on `center`.
///
/// `center` plus or minus `diameter / 2` must stay within `i32` on both
/// axes; a grid from [`Grid::for_diameter`] always satisfies this.
pub fn circle_points(center: Point, diameter: u32) -> CirclePoints {
    CirclePoints::new(center, diameter)
}

/// Paint a circle outline. Returns the number of paint calls made.
///
/// No bounds check happens here; the first cell the painter rejects aborts
/// the outline with that error.
pub fn draw_circle<C, P>(
    grid: &mut Grid<C>,
    painter: &mut P,
    center: Point,
    diameter: u32,
) -> Result<usize>
where
    P: Painter<C> + ?Sized,
{
    let mut count = 0;
    for p in circle_points(center, diameter) {
        painter.paint(grid, p.x, p.y)?;
        count += 1;
    }
    Ok(count)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;
    use crate::painter::{ColorPainter, PaintLog};
    use std::collections::HashSet;

    fn point_set(center: Point, diameter: u32) -> HashSet<Point> {
        circle_points(center, diameter).collect()
    }

    #[test]
    fn test_octant_radius_3() {
        let steps: Vec<_> = MidpointCircle::new(3).collect();
        assert_eq!(steps, vec![(0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_octant_radius_5() {
        let steps: Vec<_> = MidpointCircle::new(5).collect();
        assert_eq!(steps, vec![(0, 5), (1, 5), (2, 5), (3, 4), (4, 4)]);
    }

    #[test]
    fn test_octant_walk_near_i32_limit() {
        let mut walk = MidpointCircle::new(MidpointCircle::radius_for(u32::MAX));
        assert_eq!(walk.next(), Some((0, i32::MAX)));
        assert_eq!(walk.next(), Some((1, i32::MAX)));
        assert_eq!(walk.next(), Some((2, i32::MAX)));
    }

    #[test]
    fn test_radius_3_scenario() {
        let c = Point::new(10, 10);
        let pts = point_set(c, 6);
        for p in [(13, 10), (10, 13), (7, 10), (10, 7)] {
            assert!(pts.contains(&Point::from(p)), "missing {:?}", p);
        }
        assert!(!pts.contains(&Point::new(13, 13)));

        let mut expected = HashSet::new();
        for (a, b) in [(0, 3), (1, 3), (2, 3)] {
            for (sa, sb) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                expected.insert(Point::new(10 + sa * a, 10 + sb * b));
                expected.insert(Point::new(10 + sa * b, 10 + sb * a));
            }
        }
        assert_eq!(pts, expected);
        assert_eq!(pts.len(), 20);
        assert_eq!(circle_points(c, 6).count(), 24);
    }

    #[test]
    fn test_emission_order() {
        let first: Vec<_> = circle_points(Point::new(10, 10), 6).take(8).collect();
        assert_eq!(
            first,
            vec![
                Point::new(10, 13),
                Point::new(10, 7),
                Point::new(10, 13),
                Point::new(10, 7),
                Point::new(13, 10),
                Point::new(13, 10),
                Point::new(7, 10),
                Point::new(7, 10),
            ]
        );
    }

    #[test]
    fn test_eight_way_symmetry() {
        let c = Point::new(40, 40);
        for d in 0..64 {
            let pts = point_set(c, d);
            for p in &pts {
                let (a, b) = (p.x - c.x, p.y - c.y);
                for (x, y) in [
                    (a, b),
                    (a, -b),
                    (-a, b),
                    (-a, -b),
                    (b, a),
                    (b, -a),
                    (-b, a),
                    (-b, -a),
                ] {
                    assert!(
                        pts.contains(&Point::new(c.x + x, c.y + y)),
                        "d={} missing mirror of ({}, {})",
                        d,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_chebyshev_bound() {
        let c = Point::new(0, 0);
        for d in 0..100u32 {
            let r = (d / 2) as i32;
            let mut max = 0;
            for p in circle_points(c, d) {
                let dist = p.chebyshev(c);
                assert!(dist <= r + 1, "d={} point {:?}", d, p);
                max = max.max(dist);
            }
            assert_eq!(max, r);
        }
    }

    #[test]
    fn test_degenerate_diameters() {
        let c = Point::new(3, 4);
        for d in [0, 1] {
            let pts: Vec<_> = circle_points(c, d).collect();
            assert_eq!(pts, vec![c; 8]);
        }
    }

    #[test]
    fn test_draw_circle_routes_every_point() {
        let mut grid: Grid<u8> = Grid::for_diameter(6);
        let mut log = PaintLog::new();
        let n = draw_circle(&mut grid, &mut log, Point::new(5, 5), 6).unwrap();
        assert_eq!(n, 24);
        assert_eq!(log.calls, circle_points(Point::new(5, 5), 6).collect::<Vec<_>>());
    }

    #[test]
    fn test_draw_circle_fills_grid_cells() {
        let mut grid: Grid<u8> = Grid::for_diameter(6);
        let mut painter = ColorPainter::grid_only(1u8);
        let center = grid.center();
        draw_circle(&mut grid, &mut painter, center, 6).unwrap();
        assert_eq!(grid.painted_count(), 20);
        assert!(grid.is_unpainted(5, 5));
    }

    #[test]
    fn test_draw_circle_out_of_bounds() {
        let mut grid: Grid<u8> = Grid::new(4, 4);
        let mut painter = ColorPainter::grid_only(1u8);
        let err = draw_circle(&mut grid, &mut painter, Point::new(1, 1), 6).unwrap_err();
        assert!(matches!(err, RasterError::OutOfBounds { .. }));
    }

    #[test]
    fn test_idempotent() {
        let run = || {
            let mut grid: Grid<char> = Grid::for_diameter(23);
            let mut painter = ColorPainter::grid_only('o');
            let center = grid.center();
            draw_circle(&mut grid, &mut painter, center, 23).unwrap();
            grid
        };
        assert_eq!(run(), run());
    }
}
