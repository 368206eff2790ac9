//! Color token stored in grid cells.
//!
//! `Rgba8` is an 8-bit-per-channel color. The rasterizers treat it as an
//! opaque value; only the raster surface looks at the channels.
//!
//! Colors are written and read as strings in the forms a styling layer
//! hands out: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
//! `rgba(r, g, b, a)` (alpha in `0.0..=1.0`) and a handful of CSS names.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::basics::iround;
use crate::error::RasterError;

// ============================================================================
// Rgba8
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u32 = 255;

    /// Default paint color of the shape tool.
    pub const CYAN: Rgba8 = Rgba8::rgb(0x00, 0xd9, 0xff);
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);
    pub const RED: Rgba8 = Rgba8::rgb(255, 0, 0);
    pub const GREEN: Rgba8 = Rgba8::rgb(0, 128, 0);
    pub const BLUE: Rgba8 = Rgba8::rgb(0, 0, 255);
    /// Lattice line color of the raster surface.
    pub const GRID_LINE: Rgba8 = Rgba8::rgb(0x33, 0x33, 0x33);

    pub fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
            a: a as u8,
        }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK as u8
    }

    /// Channels in RGBA byte order.
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    fn from_named(name: &str) -> Option<Self> {
        let c = match name {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "cyan" => Self::rgb(0, 255, 255),
            "transparent" => Self::new(0, 0, 0, 0),
            _ => return None,
        };
        Some(c)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => None,
        }
    }

    fn from_functional(s: &str) -> Option<Self> {
        let (args, has_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest.strip_suffix(')')?, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest.strip_suffix(')')?, false)
        } else {
            return None;
        };

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != if has_alpha { 4 } else { 3 } {
            return None;
        }
        let channel = |p: &str| p.parse::<u8>().ok();
        let mut c = Self::rgb(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
        if has_alpha {
            let a: f64 = parts[3].parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            c.a = iround(a * Self::BASE_MASK as f64) as u8;
        }
        Some(c)
    }
}

impl FromStr for Rgba8 {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        let parsed = match t.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => Self::from_functional(&t).or_else(|| Self::from_named(&t)),
        };
        parsed.ok_or_else(|| RasterError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = RasterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_hex()
    }
}

// ============================================================================
// Tests
// ============================================================================
