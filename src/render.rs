//! Shape pipeline: descriptor in, painted grid out.
//!
//! One call handles one request. A fresh grid sized for the diameter is
//! allocated, the surface is reset to match, the outline is rasterized
//! through a [`ColorPainter`], and for filled shapes the region around the
//! grid center is flood-filled in the same color.

use std::time::{Duration, Instant};

use crate::circle::draw_circle;
use crate::color::Rgba8;
use crate::config::RasterConfig;
use crate::error::Result;
use crate::flood_fill::flood_fill;
use crate::grid::Grid;
use crate::painter::{CellSurface, ColorPainter, NullSurface};
use crate::polygon::draw_polygon;
use crate::shape::{ShapeDescriptor, ShapeKind};

/// Paint-call counts and timing for one rendered shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Paint calls made by the outline rasterizer, revisits included.
    pub outline_paints: usize,
    /// Cells painted by the flood fill.
    pub fill_paints: usize,
    pub elapsed: Duration,
}

/// Rasterize `shape` and return the grid with the statistics of the run.
pub fn render_shape_with_stats<S>(
    shape: &ShapeDescriptor,
    config: &RasterConfig,
    surface: S,
) -> Result<(Grid<Rgba8>, RenderStats)>
where
    S: CellSurface<Rgba8>,
{
    config.validate()?;
    if let Err(e) = shape.validate(config) {
        log::warn!("rejecting shape {:?}: {}", shape, e);
        return Err(e);
    }

    let start = Instant::now();
    let mut grid = Grid::for_diameter(shape.diameter);
    let center = grid.center();
    let mut painter = ColorPainter::new(shape.color, surface);
    CellSurface::<Rgba8>::reset(painter.surface_mut(), grid.width(), grid.height())?;

    let outline_paints = match shape.kind {
        ShapeKind::Circle => draw_circle(&mut grid, &mut painter, center, shape.diameter)?,
        ShapeKind::Polygon => draw_polygon(
            &mut grid,
            &mut painter,
            center,
            shape.sides,
            shape.angle_offset,
            shape.diameter,
        )?,
    };

    let fill_paints = if shape.is_filled() {
        flood_fill(&mut grid, &mut painter, center, shape.color)?
    } else {
        0
    };

    let stats = RenderStats {
        outline_paints,
        fill_paints,
        elapsed: start.elapsed(),
    };
    log::debug!(
        "rendered {:?} d={} on {}x{} grid: {} outline paints, {} fill paints in {:?}",
        shape.kind,
        shape.diameter,
        grid.width(),
        grid.height(),
        stats.outline_paints,
        stats.fill_paints,
        stats.elapsed
    );
    Ok((grid, stats))
}

/// Rasterize `shape`, drawing every painted cell onto `surface`.
pub fn render_shape<S>(shape: &ShapeDescriptor, config: &RasterConfig, surface: S) -> Result<Grid<Rgba8>>
where
    S: CellSurface<Rgba8>,
{
    render_shape_with_stats(shape, config, surface).map(|(grid, _)| grid)
}

/// Rasterize `shape` into a grid only.
pub fn generate_grid(shape: &ShapeDescriptor, config: &RasterConfig) -> Result<Grid<Rgba8>> {
    render_shape(shape, config, NullSurface)
}

// ============================================================================
// Tests
// ============================================================================
