//! Grid model — a fixed-size 2D array of nullable color cells.
//!
//! Cells are stored row-major. A cell is either `None` (unpainted) or
//! `Some(color)`. The dimensions are fixed at allocation; every access is
//! bounds-checked and out-of-range writes fail with
//! [`RasterError::OutOfBounds`] instead of touching a neighboring row.

use serde::{Deserialize, Serialize};

use crate::basics::Point;
use crate::error::{RasterError, Result};

/// Empty cells kept on each side of a shape's bounding box.
pub const MARGIN: u32 = 2;

// ============================================================================
// Grid
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<C>")]
pub struct Grid<C> {
    width: u32,
    height: u32,
    cells: Vec<Option<C>>,
}

impl<C> Grid<C> {
    /// Allocate an unpainted `width` x `height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, || None);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Allocate a square grid that holds a shape of `diameter` plus
    /// [`MARGIN`] cells on every side.
    ///
    /// The allocation is `(diameter + 2 * MARGIN)^2` cells, so callers bound
    /// `diameter` first (see `RasterConfig::max_diameter`). The side length
    /// saturates at `u32::MAX`; a diameter that large fails to allocate.
    pub fn for_diameter(diameter: u32) -> Self {
        let side = diameter.saturating_add(2 * MARGIN);
        Self::new(side, side)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center cell, floored for even sizes.
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> RasterError {
        RasterError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Raw cell, or `None` when `(x, y)` is outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<&Option<C>> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Color of the cell, failing on out-of-bounds coordinates.
    pub fn cell(&self, x: i32, y: i32) -> Result<Option<&C>> {
        match self.index(x, y) {
            Some(i) => Ok(self.cells[i].as_ref()),
            None => Err(self.out_of_bounds(x, y)),
        }
    }

    /// Paint a cell. The previous value is overwritten.
    pub fn set(&mut self, x: i32, y: i32, color: C) -> Result<()> {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = Some(color);
                Ok(())
            }
            None => Err(self.out_of_bounds(x, y)),
        }
    }

    /// True only for in-bounds cells that hold no color.
    pub fn is_unpainted(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Reset every cell to unpainted.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Painted cells in row-major order.
    pub fn painted_points(&self) -> Vec<Point> {
        self.iter()
            .filter_map(|(p, c)| c.as_ref().map(|_| p))
            .collect()
    }

    /// Every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Option<C>)> + '_ {
        let w = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Point::new((i % w) as i32, (i / w) as i32), c))
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<C>]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Text rendering, one line per row. `glyph` maps a painted cell to a
    /// character; unpainted cells are `.`.
    pub fn to_ascii<F>(&self, mut glyph: F) -> String
    where
        F: FnMut(&C) -> char,
    {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.rows() {
            for cell in row {
                out.push(cell.as_ref().map_or('.', &mut glyph));
            }
            out.push('\n');
        }
        out
    }
}

#[derive(Deserialize)]
struct RawGrid<C> {
    width: u32,
    height: u32,
    cells: Vec<Option<C>>,
}

impl<C> TryFrom<RawGrid<C>> for Grid<C> {
    type Error = RasterError;

    fn try_from(raw: RawGrid<C>) -> Result<Self> {
        let expected = raw.width as usize * raw.height as usize;
        if raw.cells.len() != expected {
            return Err(RasterError::InvalidGrid {
                expected,
                actual: raw.cells.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_diameter_adds_margin() {
        let g: Grid<u8> = Grid::for_diameter(17);
        assert_eq!(g.width(), 21);
        assert_eq!(g.height(), 21);
        assert_eq!(g.center(), Point::new(10, 10));
        assert_eq!(g.painted_count(), 0);

        let g: Grid<u8> = Grid::for_diameter(10);
        assert_eq!(g.width(), 14);
        assert_eq!(g.center(), Point::new(7, 7));
    }

    #[test]
    fn test_set_and_get() {
        let mut g = Grid::new(4, 3);
        assert!(g.is_unpainted(3, 2));
        g.set(3, 2, 'a').unwrap();
        assert_eq!(g.cell(3, 2).unwrap(), Some(&'a'));
        assert_eq!(g.get(3, 2), Some(&Some('a')));
        assert!(!g.is_unpainted(3, 2));
        g.set(3, 2, 'b').unwrap();
        assert_eq!(g.cell(3, 2).unwrap(), Some(&'b'));
        assert_eq!(g.painted_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_fails_fast() {
        let mut g: Grid<u8> = Grid::new(4, 3);
        let err = g.set(4, 0, 1).unwrap_err();
        assert_eq!(
            err,
            RasterError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            }
        );
        assert!(g.set(-1, 0, 1).is_err());
        assert!(g.cell(0, 3).is_err());
        assert_eq!(g.get(0, -1), None);
        assert!(!g.is_unpainted(0, -1));
        assert_eq!(g.painted_count(), 0);
    }

    #[test]
    fn test_painted_points_row_major() {
        let mut g = Grid::new(3, 3);
        g.set(2, 0, 1u8).unwrap();
        g.set(0, 1, 1u8).unwrap();
        assert_eq!(
            g.painted_points(),
            vec![Point::new(2, 0), Point::new(0, 1)]
        );
        g.clear();
        assert!(g.painted_points().is_empty());
    }

    #[test]
    fn test_to_ascii() {
        let mut g = Grid::new(3, 2);
        g.set(1, 0, ()).unwrap();
        g.set(2, 1, ()).unwrap();
        assert_eq!(g.to_ascii(|_| '#'), ".#.\n..#\n");
    }

    #[test]
    fn test_serde_export() {
        let mut g = Grid::new(2, 1);
        g.set(1, 0, 7u8).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"width":2,"height":1,"cells":[null,7]}"#);
        let back: Grid<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let res = serde_json::from_str::<Grid<u8>>(r#"{"width":2,"height":2,"cells":[null]}"#);
        assert!(res.is_err());
    }
}
