//! Error type shared by the grid, the rasterizers and the shape pipeline.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("diameter {diameter} exceeds the configured maximum of {max}")]
    DiameterTooLarge { diameter: u32, max: u32 },

    #[error("a polygon needs at least 2 sides and at most the configured maximum, got {0}")]
    InvalidSides(u32),

    #[error("a {width}x{height} pixel surface exceeds the limit of {max} pixels")]
    SurfaceTooLarge { width: u64, height: u64, max: u64 },

    #[error("grid data holds {actual} cells, expected {expected}")]
    InvalidGrid { expected: usize, actual: usize },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RasterError>;
