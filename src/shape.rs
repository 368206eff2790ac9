//! Shape descriptor — what the caller asks to draw.
//!
//! Defaults reproduce the shape tool's start-up state: a circle of diameter
//! 17, six sides ready for polygon mode, outline only, in `#00d9ff`.

use serde::{Deserialize, Serialize};

use crate::color::Rgba8;
use crate::config::RasterConfig;
use crate::error::{RasterError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Circle,
    #[serde(alias = "shape")]
    Polygon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    #[serde(alias = "thin")]
    Outline,
    Filled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    /// Polygon side count; ignored for circles. Two sides draws nothing.
    pub sides: u32,
    /// Shape size in cells.
    pub diameter: u32,
    /// Rotation of the first polygon vertex, in radians.
    pub angle_offset: f64,
    pub fill: FillMode,
    pub color: Rgba8,
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Circle,
            sides: 6,
            diameter: 17,
            angle_offset: 0.0,
            fill: FillMode::Outline,
            color: Rgba8::CYAN,
        }
    }
}

impl ShapeDescriptor {
    pub fn circle(diameter: u32) -> Self {
        Self {
            kind: ShapeKind::Circle,
            diameter,
            ..Self::default()
        }
    }

    pub fn polygon(sides: u32, diameter: u32) -> Self {
        Self {
            kind: ShapeKind::Polygon,
            sides,
            diameter,
            ..Self::default()
        }
    }

    pub fn with_angle(mut self, angle_offset: f64) -> Self {
        self.angle_offset = angle_offset;
        self
    }

    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    pub fn is_filled(&self) -> bool {
        self.fill == FillMode::Filled
    }

    /// Reject descriptors the rasterizers should never see.
    pub fn validate(&self, config: &RasterConfig) -> Result<()> {
        if self.diameter > config.max_diameter {
            return Err(RasterError::DiameterTooLarge {
                diameter: self.diameter,
                max: config.max_diameter,
            });
        }
        if self.kind == ShapeKind::Polygon && !(2..=config.max_sides).contains(&self.sides) {
            return Err(RasterError::InvalidSides(self.sides));
        }
        if !self.angle_offset.is_finite() {
            return Err(RasterError::Config(format!(
                "angle offset must be finite, got {}",
                self.angle_offset
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
