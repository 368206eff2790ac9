//! Regular polygon rasterizer.
//!
//! Vertices are spaced evenly on a circle of radius `diameter / 2` starting
//! at `angle_offset` (radians, measured from the +x axis toward +y), snapped
//! to cells with [`iround`], and joined into a closed loop with the line
//! rasterizer. Each edge is drawn in full, so shared vertices are emitted
//! twice.

use crate::basics::{iround, Point, PI};
use crate::error::Result;
use crate::grid::Grid;
use crate::line::{line_points, LinePoints};
use crate::painter::Painter;

/// Snapped vertices of a regular polygon, in angular order.
///
/// Two sides is the degenerate "draw nothing" case and yields no vertices.
pub fn polygon_vertices(center: Point, sides: u32, angle_offset: f64, diameter: u32) -> Vec<Point> {
    if sides == 2 {
        return Vec::new();
    }
    let radius = (diameter / 2) as f64;
    let n = sides as f64;
    (0..sides)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / n + angle_offset;
            Point::new(
                iround(center.x as f64 + radius * a.cos()),
                iround(center.y as f64 + radius * a.sin()),
            )
        })
        .collect()
}

/// Closed loop of edges `v[i] -> v[(i + 1) % n]`.
pub fn polygon_edges(vertices: &[Point]) -> impl Iterator<Item = LinePoints> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| line_points(vertices[i], vertices[(i + 1) % n]))
}

/// Every cell emitted for a polygon outline, edge after edge.
pub fn polygon_points(center: Point, sides: u32, angle_offset: f64, diameter: u32) -> Vec<Point> {
    let vertices = polygon_vertices(center, sides, angle_offset, diameter);
    polygon_edges(&vertices).flatten().collect()
}

/// Paint a polygon outline. Returns the number of paint calls made.
pub fn draw_polygon<C, P>(
    grid: &mut Grid<C>,
    painter: &mut P,
    center: Point,
    sides: u32,
    angle_offset: f64,
    diameter: u32,
) -> Result<usize>
where
    P: Painter<C> + ?Sized,
{
    let vertices = polygon_vertices(center, sides, angle_offset, diameter);
    let mut count = 0;
    for edge in polygon_edges(&vertices) {
        for p in edge {
            painter.paint(grid, p.x, p.y)?;
            count += 1;
        }
    }
    Ok(count)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::{ColorPainter, PaintLog};
    use std::collections::HashSet;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_two_sides_is_empty() {
        assert!(polygon_vertices(p(10, 10), 2, 0.0, 17).is_empty());
        assert!(polygon_points(p(10, 10), 2, 0.3, 17).is_empty());

        let mut grid: Grid<u8> = Grid::for_diameter(17);
        let mut log = PaintLog::new();
        assert_eq!(draw_polygon(&mut grid, &mut log, p(10, 10), 2, 0.0, 17).unwrap(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_square_vertices() {
        let v = polygon_vertices(p(7, 7), 4, 0.0, 10);
        assert_eq!(v, vec![p(12, 7), p(7, 12), p(2, 7), p(7, 2)]);
    }

    #[test]
    fn test_square_is_closed_loop() {
        let c = p(7, 7);
        let v = polygon_vertices(c, 4, 0.0, 10);
        let edges: Vec<Vec<Point>> = polygon_edges(&v).map(|e| e.collect()).collect();
        assert_eq!(edges.len(), 4);
        for (i, e) in edges.iter().enumerate() {
            assert_eq!(e.first(), Some(&v[i]));
            assert_eq!(e.last(), Some(&v[(i + 1) % 4]));
            assert_eq!(e.len(), 6);
        }
        assert_eq!(polygon_points(c, 4, 0.0, 10).len(), 24);
    }

    #[test]
    fn test_hexagon_vertices() {
        let v = polygon_vertices(p(10, 10), 6, 0.0, 17);
        assert_eq!(
            v,
            vec![p(18, 10), p(14, 17), p(6, 17), p(2, 10), p(6, 3), p(14, 3)]
        );
    }

    #[test]
    fn test_angle_offset_rotates() {
        let v = polygon_vertices(p(7, 7), 4, PI / 4.0, 10);
        // 5 * cos(45deg) = 3.54 -> 4
        assert_eq!(v, vec![p(11, 11), p(3, 11), p(3, 3), p(11, 3)]);
    }

    #[test]
    fn test_zero_radius_collapses_to_center() {
        let c = p(3, 3);
        for d in [0, 1] {
            let pts: HashSet<Point> = polygon_points(c, 5, 0.0, d).into_iter().collect();
            assert_eq!(pts, HashSet::from([c]));
        }
    }

    #[test]
    fn test_low_side_counts() {
        assert!(polygon_points(p(5, 5), 0, 0.0, 6).is_empty());
        assert_eq!(polygon_points(p(5, 5), 1, 0.0, 6), vec![p(8, 5)]);
    }

    #[test]
    fn test_outline_is_connected_loop() {
        for sides in 3..=12 {
            let pts = polygon_points(p(20, 20), sides, 0.1, 31);
            for w in pts.windows(2) {
                assert!(w[0] == w[1] || w[0].is_8_neighbor(w[1]));
            }
            assert_eq!(pts.first(), pts.last());
        }
    }

    #[test]
    fn test_draw_polygon_matches_points() {
        let mut grid: Grid<char> = Grid::for_diameter(17);
        let mut painter = ColorPainter::grid_only('#');
        let n = draw_polygon(&mut grid, &mut painter, p(10, 10), 6, 0.0, 17).unwrap();
        let pts = polygon_points(p(10, 10), 6, 0.0, 17);
        assert_eq!(n, pts.len());
        let distinct: HashSet<Point> = pts.into_iter().collect();
        assert_eq!(grid.painted_count(), distinct.len());
        assert!(grid.is_unpainted(10, 10));
    }
}
