//! # grid-shapes
//!
//! Rasterization of circles and regular polygons onto a grid of nullable
//! color cells, with 4-connected flood fill.
//!
//! - Midpoint circle outlines with 8-way symmetry
//! - Symmetric Bresenham lines
//! - Regular polygons from evenly spaced, rounded vertices
//! - Breadth-first flood fill bounded by painted cells
//! - A `Painter` sink that decouples rasterization from rendering
//!
//! ## Pipeline
//!
//! 1. **Descriptor** — kind, sides, diameter, angle offset, fill mode, color
//! 2. **Grid** — allocated per request, `diameter + 2 * MARGIN` cells square
//! 3. **Outline** — circle or polygon cells routed through the painter
//! 4. **Fill** — optional flood fill from the grid center
//! 5. **Surface** — every painted cell is mirrored onto a `CellSurface`
//!
//! ```
//! use grid_shapes::{generate_grid, FillMode, RasterConfig, ShapeDescriptor};
//!
//! let shape = ShapeDescriptor::polygon(6, 17).with_fill(FillMode::Filled);
//! let grid = generate_grid(&shape, &RasterConfig::default()).unwrap();
//! assert_eq!(grid.width(), 21);
//! assert!(grid.cell(10, 10).unwrap().is_some());
//! ```

// Foundation
pub mod basics;
pub mod color;
pub mod error;
pub mod grid;

// Rasterizers
pub mod circle;
pub mod flood_fill;
pub mod line;
pub mod painter;
pub mod polygon;

// Requests and output
pub mod config;
pub mod render;
pub mod shape;
pub mod surface;

pub use basics::Point;
pub use circle::{circle_points, draw_circle};
pub use color::Rgba8;
pub use config::{RasterConfig, RenderRequest};
pub use error::{RasterError, Result};
pub use flood_fill::{fill_region, flood_fill};
pub use grid::{Grid, MARGIN};
pub use line::{draw_line, line_points};
pub use painter::{CellSurface, ColorPainter, NullSurface, PaintLog, Painter};
pub use polygon::{draw_polygon, polygon_points, polygon_vertices};
pub use render::{generate_grid, render_shape, render_shape_with_stats, RenderStats};
pub use shape::{FillMode, ShapeDescriptor, ShapeKind};
pub use surface::RasterSurface;
