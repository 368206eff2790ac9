//! Paint callback — the sink every rasterized cell is routed through.
//!
//! Rasterizers never write to the grid directly. For each cell they decide
//! belongs to a shape they call [`Painter::paint`] once, handing over the
//! grid and the coordinate. The standard painter, [`ColorPainter`], records
//! its color in the grid and forwards the cell to a [`CellSurface`] that
//! does the actual drawing.
//!
//! A cell may be painted more than once (symmetric circle points on the
//! axes, polygon edges sharing a vertex). Painting is idempotent: the final
//! grid is the same, only the surface sees the repeated calls.

use crate::basics::Point;
use crate::error::Result;
use crate::grid::Grid;

// ============================================================================
// Traits
// ============================================================================

/// Receives one call per emitted cell.
pub trait Painter<C> {
    fn paint(&mut self, grid: &mut Grid<C>, x: i32, y: i32) -> Result<()>;
}

impl<C, F> Painter<C> for F
where
    F: FnMut(&mut Grid<C>, i32, i32) -> Result<()>,
{
    fn paint(&mut self, grid: &mut Grid<C>, x: i32, y: i32) -> Result<()> {
        self(grid, x, y)
    }
}

/// Rendering side of a paint: draw one grid cell in `color`.
pub trait CellSurface<C> {
    /// Called when a new grid of `width` x `height` cells is allocated.
    /// A surface that cannot hold the grid refuses it here, before any
    /// cell is painted.
    fn reset(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn fill_cell(&mut self, x: i32, y: i32, color: &C);
}

impl<C, S: CellSurface<C> + ?Sized> CellSurface<C> for &mut S {
    fn reset(&mut self, width: u32, height: u32) -> Result<()> {
        CellSurface::<C>::reset(&mut **self, width, height)
    }

    fn fill_cell(&mut self, x: i32, y: i32, color: &C) {
        CellSurface::<C>::fill_cell(&mut **self, x, y, color)
    }
}

/// Surface that draws nothing; used when only the grid is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl<C> CellSurface<C> for NullSurface {
    fn fill_cell(&mut self, _x: i32, _y: i32, _color: &C) {}
}

// ============================================================================
// ColorPainter
// ============================================================================

/// Paints cells in a single color and mirrors them onto a surface.
///
/// The grid write happens first; an out-of-bounds coordinate fails before
/// the surface is touched.
pub struct ColorPainter<C, S> {
    color: C,
    surface: S,
    paints: usize,
}

impl<C: Clone, S: CellSurface<C>> ColorPainter<C, S> {
    pub fn new(color: C, surface: S) -> Self {
        Self {
            color,
            surface,
            paints: 0,
        }
    }

    /// Number of successful paint calls so far, revisits included.
    pub fn paints(&self) -> usize {
        self.paints
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<C: Clone> ColorPainter<C, NullSurface> {
    /// Painter that only records into the grid.
    pub fn grid_only(color: C) -> Self {
        Self::new(color, NullSurface)
    }
}

impl<C: Clone, S: CellSurface<C>> Painter<C> for ColorPainter<C, S> {
    fn paint(&mut self, grid: &mut Grid<C>, x: i32, y: i32) -> Result<()> {
        grid.set(x, y, self.color.clone())?;
        self.surface.fill_cell(x, y, &self.color);
        self.paints += 1;
        Ok(())
    }
}

// ============================================================================
// PaintLog
// ============================================================================

/// Records every paint call in order without touching the grid.
#[derive(Debug, Clone, Default)]
pub struct PaintLog {
    pub calls: Vec<Point>,
}

impl PaintLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl<C> Painter<C> for PaintLog {
    fn paint(&mut self, _grid: &mut Grid<C>, x: i32, y: i32) -> Result<()> {
        self.calls.push(Point::new(x, y));
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
