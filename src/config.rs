//! Rasterization limits and surface appearance.
//!
//! Callers pass a `RasterConfig` explicitly; nothing is read from global
//! state. Every field has a default, so a JSON document only needs to name
//! the values it changes.

use serde::{Deserialize, Serialize};

use crate::color::Rgba8;
use crate::error::{RasterError, Result};
use crate::shape::ShapeDescriptor;

/// Largest diameter accepted by default. Flood fill work grows with the
/// square of this value.
pub const DEFAULT_MAX_DIAMETER: u32 = 1024;

/// Largest polygon side count accepted by default.
pub const DEFAULT_MAX_SIDES: u32 = 20;

/// Pixels per grid cell on the raster surface.
pub const DEFAULT_CELL_SIZE: u32 = 24;

/// Largest accepted `cell_size`.
pub const MAX_CELL_SIZE: u32 = 256;

/// Pixel budget of one raster surface (8192 x 8192, 256 MiB of RGBA).
pub const DEFAULT_MAX_SURFACE_PIXELS: u64 = 8192 * 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    pub max_diameter: u32,
    pub max_sides: u32,
    /// Edge of one cell on the raster surface, in pixels.
    pub cell_size: u32,
    /// Upper bound on `width * height` of a raster surface.
    pub max_surface_pixels: u64,
    /// Surface color behind unpainted cells.
    pub background: Rgba8,
    /// Lattice lines between cells.
    pub grid_line: Rgba8,
    /// Stroke drawn around every painted cell.
    pub cell_outline: Rgba8,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            max_diameter: DEFAULT_MAX_DIAMETER,
            max_sides: DEFAULT_MAX_SIDES,
            cell_size: DEFAULT_CELL_SIZE,
            max_surface_pixels: DEFAULT_MAX_SURFACE_PIXELS,
            background: Rgba8::WHITE,
            grid_line: Rgba8::GRID_LINE,
            cell_outline: Rgba8::GRID_LINE,
        }
    }
}

impl RasterConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(RasterError::Config(format!(
                "cell_size must be between 1 and {}, got {}",
                MAX_CELL_SIZE, self.cell_size
            )));
        }
        if self.max_surface_pixels == 0 {
            return Err(RasterError::Config(
                "max_surface_pixels must be at least 1".into(),
            ));
        }
        if self.max_sides < 2 {
            return Err(RasterError::Config("max_sides must be at least 2".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration object.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| RasterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// A complete drawing request: limits plus the shape to draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub config: RasterConfig,
    pub shape: ShapeDescriptor,
}

impl RenderRequest {
    /// Parse a `{ "config": {...}, "shape": {...} }` document. Both keys
    /// are optional.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let req: Self = serde_json::from_str(s).map_err(|e| RasterError::Config(e.to_string()))?;
        req.config.validate()?;
        Ok(req)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    #[test]
    fn test_partial_config() {
        let cfg = RasterConfig::from_json_str(r##"{"cell_size": 8, "background": "#000"}"##).unwrap();
        assert_eq!(cfg.cell_size, 8);
        assert_eq!(cfg.background, Rgba8::BLACK);
        assert_eq!(cfg.max_diameter, DEFAULT_MAX_DIAMETER);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            RasterConfig::from_json_str(r#"{"cell_size": 0}"#),
            Err(RasterError::Config(_))
        ));
        assert!(matches!(
            RasterConfig::from_json_str(r#"{"cell_size": 5000000}"#),
            Err(RasterError::Config(_))
        ));
        assert!(matches!(
            RasterConfig::from_json_str(r#"{"max_surface_pixels": 0}"#),
            Err(RasterError::Config(_))
        ));
        assert!(RasterConfig::from_json_str(r#"{"cell_size": 256}"#).is_ok());
        assert!(matches!(
            RasterConfig::from_json_str(r#"{"background": "nope"}"#),
            Err(RasterError::Config(_))
        ));
        assert!(matches!(
            RasterConfig::from_json_str("not json"),
            Err(RasterError::Config(_))
        ));
    }

    #[test]
    fn test_render_request() {
        let req = RenderRequest::from_json_str(
            r#"{"shape": {"kind": "polygon", "sides": 3, "diameter": 9}}"#,
        )
        .unwrap();
        assert_eq!(req.config, RasterConfig::default());
        assert_eq!(req.shape.kind, ShapeKind::Polygon);
        assert_eq!(req.shape.sides, 3);

        let empty = RenderRequest::from_json_str("{}").unwrap();
        assert_eq!(empty, RenderRequest::default());
    }
}
