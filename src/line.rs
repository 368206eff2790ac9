//! Bresenham line rasterizer.
//!
//! Symmetric integer variant: both axes may step in the same iteration, so
//! every emitted cell is an 8-neighbor of the previous one. The error term
//! is held doubled (`2 * err`) so the half-step start value
//! `(dx > dy ? dx : -dy) / 2` stays exact without fractions.

use crate::basics::Point;
use crate::error::Result;
use crate::grid::Grid;
use crate::painter::Painter;

// ============================================================================
// LinePoints
// ============================================================================

/// Cells of the segment `from -> to`, both endpoints included.
#[derive(Debug, Clone)]
pub struct LinePoints {
    cur: Point,
    to: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err2: i32,
    done: bool,
}

impl LinePoints {
    pub fn new(from: Point, to: Point) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        Self {
            cur: from,
            to,
            dx,
            dy,
            sx,
            sy,
            err2: if dx > dy { dx } else { -dy },
            done: false,
        }
    }

    /// Number of cells along the major axis, endpoints included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.dx.max(self.dy) as u32 + 1
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.to {
            self.done = true;
            return Some(p);
        }

        let e2 = self.err2;
        if e2 > -2 * self.dx {
            self.err2 -= 2 * self.dy;
            self.cur.x += self.sx;
        }
        if e2 < 2 * self.dy {
            self.err2 += 2 * self.dx;
            self.cur.y += self.sy;
        }
        Some(p)
    }
}

/// Cells of the segment between two grid points.
pub fn line_points(from: Point, to: Point) -> LinePoints {
    LinePoints::new(from, to)
}

/// Paint the segment `from -> to`. Returns the number of paint calls made.
pub fn draw_line<C, P>(grid: &mut Grid<C>, painter: &mut P, from: Point, to: Point) -> Result<usize>
where
    P: Painter<C> + ?Sized,
{
    let mut count = 0;
    for p in line_points(from, to) {
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
    use crate::painter::PaintLog;

    fn pts(a: (i32, i32), b: (i32, i32)) -> Vec<Point> {
        line_points(a.into(), b.into()).collect()
    }

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_single_point() {
        assert_eq!(pts((4, 7), (4, 7)), vec![p(4, 7)]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(pts((0, 0), (3, 0)), vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
        assert_eq!(pts((2, 3), (2, 0)), vec![p(2, 3), p(2, 2), p(2, 1), p(2, 0)]);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(pts((0, 0), (3, 3)), vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3)]);
        assert_eq!(pts((3, 0), (0, 3)), vec![p(3, 0), p(2, 1), p(1, 2), p(0, 3)]);
    }

    #[test]
    fn test_shallow_slope() {
        // err starts at 1.5: x steps every time, y steps once in the middle.
        assert_eq!(pts((0, 0), (3, 1)), vec![p(0, 0), p(1, 0), p(2, 1), p(3, 1)]);
    }

    #[test]
    fn test_steep_slope() {
        assert_eq!(
            pts((18, 10), (14, 17)),
            vec![
                p(18, 10),
                p(17, 11),
                p(17, 12),
                p(16, 13),
                p(16, 14),
                p(15, 15),
                p(15, 16),
                p(14, 17),
            ]
        );
    }

    #[test]
    fn test_endpoints_and_connectivity() {
        let ends = [(-7, 0), (0, 0), (5, 2), (9, -9), (3, 11), (-4, -6), (12, 5)];
        for &a in &ends {
            for &b in &ends {
                let line = pts(a, b);
                assert_eq!(line.first(), Some(&Point::from(a)));
                assert_eq!(line.last(), Some(&Point::from(b)));
                for w in line.windows(2) {
                    assert!(w[0].is_8_neighbor(w[1]), "{:?} -> {:?}: {:?}", a, b, w);
                }
                let expected = line_points(a.into(), b.into()).len() as usize;
                assert_eq!(line.len(), expected, "{:?} -> {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_caller_points_untouched() {
        let from = p(1, 1);
        let to = p(6, 3);
        let _ = line_points(from, to).count();
        assert_eq!(from, p(1, 1));
        assert_eq!(to, p(6, 3));
    }

    #[test]
    fn test_draw_line_paints_each_point() {
        let mut grid: Grid<u8> = Grid::new(8, 8);
        let mut log = PaintLog::new();
        let n = draw_line(&mut grid, &mut log, p(0, 0), p(5, 2)).unwrap();
        assert_eq!(n, 6);
        assert_eq!(log.calls, pts((0, 0), (5, 2)));
    }
}
