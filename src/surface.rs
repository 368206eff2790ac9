//! Raster surface — an RGBA image the painted cells are drawn onto.
//!
//! Each grid cell maps to a `cell_size` pixel square. `reset` clears the
//! image and draws the 1px lattice between cells; `fill_cell` fills one
//! square and strokes its border. Rows are stored top-down, 4 bytes per
//! pixel, so the buffer can be handed to a canvas or written as a BMP.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::color::Rgba8;
use crate::config::RasterConfig;
use crate::error::{RasterError, Result};
use crate::painter::CellSurface;

// ============================================================================
// RasterSurface
// ============================================================================

#[derive(Clone)]
pub struct RasterSurface {
    cell_size: u32,
    max_pixels: u64,
    width: u32,
    height: u32,
    data: Vec<u8>,
    background: Rgba8,
    grid_line: Rgba8,
    cell_outline: Rgba8,
}

impl RasterSurface {
    pub fn new(config: &RasterConfig) -> Self {
        Self {
            cell_size: config.cell_size.max(1),
            max_pixels: config.max_surface_pixels,
            width: 0,
            height: 0,
            data: Vec::new(),
            background: config.background,
            grid_line: config.grid_line,
            cell_outline: config.cell_outline,
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA bytes, row-major, top to bottom.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgba8 {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        })
    }

    /// Pixel at the middle of grid cell `(cx, cy)`.
    pub fn cell_pixel(&self, cx: u32, cy: u32) -> Option<Rgba8> {
        let half = self.cell_size / 2;
        let x = cx.checked_mul(self.cell_size)?.checked_add(half)?;
        let y = cy.checked_mul(self.cell_size)?.checked_add(half)?;
        self.pixel(x, y)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    #[inline]
    fn put(&mut self, x: u32, y: u32, c: &Rgba8) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&c.to_bytes());
    }

    /// Fill the inclusive pixel rectangle, clipped to the surface.
    fn copy_bar(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, c: &Rgba8) {
        let x1 = x1.max(0);
        let y1 = y1.max(0);
        let x2 = x2.min(self.width as i64 - 1);
        let y2 = y2.min(self.height as i64 - 1);
        if x1 > x2 || y1 > y2 {
            return;
        }
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.put(x as u32, y as u32, c);
            }
        }
    }

    fn copy_hline(&mut self, x1: i64, y: i64, x2: i64, c: &Rgba8) {
        self.copy_bar(x1, y, x2, y, c);
    }

    fn copy_vline(&mut self, x: i64, y1: i64, y2: i64, c: &Rgba8) {
        self.copy_bar(x, y1, x, y2, c);
    }

    fn draw_lattice(&mut self, cols: u32, rows: u32) {
        let cs = self.cell_size as i64;
        let (w, h) = (self.width as i64, self.height as i64);
        let line = self.grid_line;
        for i in 0..=cols as i64 {
            self.copy_vline(i * cs, 0, h - 1, &line);
        }
        for j in 0..=rows as i64 {
            self.copy_hline(0, j * cs, w - 1, &line);
        }
    }

    // ------------------------------------------------------------------------
    // BMP output (32-bit BGRA, top-down)
    // ------------------------------------------------------------------------

    pub fn write_bmp<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let w = self.width;
        let h = self.height;
        let row_size = w * 4;
        let image_size = row_size * h;
        let file_size = 14 + 40 + image_size;

        // BMP file header (14 bytes)
        out.write_all(b"BM")?;
        out.write_all(&file_size.to_le_bytes())?;
        out.write_all(&[0u8; 4])?; // reserved
        out.write_all(&(14u32 + 40).to_le_bytes())?; // pixel data offset

        // BITMAPINFOHEADER (40 bytes)
        out.write_all(&40u32.to_le_bytes())?;
        out.write_all(&w.to_le_bytes())?;
        out.write_all(&(-(h as i32)).to_le_bytes())?; // negative height = top-down
        out.write_all(&1u16.to_le_bytes())?; // planes
        out.write_all(&32u16.to_le_bytes())?; // bits per pixel
        out.write_all(&0u32.to_le_bytes())?; // BI_RGB
        out.write_all(&image_size.to_le_bytes())?;
        out.write_all(&[0u8; 4])?; // x pixels per meter
        out.write_all(&[0u8; 4])?; // y pixels per meter
        out.write_all(&0u32.to_le_bytes())?; // colors used
        out.write_all(&0u32.to_le_bytes())?; // important colors

        let mut row = vec![0u8; row_size as usize];
        for src in self.data.chunks_exact(row_size.max(1) as usize) {
            for (d, s) in row.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
                d[0] = s[2];
                d[1] = s[1];
                d[2] = s[0];
                d[3] = s[3];
            }
            out.write_all(&row)?;
        }
        Ok(())
    }

    pub fn save_bmp(&self, path: &Path) -> io::Result<()> {
        let mut f = BufWriter::new(File::create(path)?);
        self.write_bmp(&mut f)?;
        f.flush()
    }
}

impl CellSurface<Rgba8> for RasterSurface {
    fn reset(&mut self, cols: u32, rows: u32) -> Result<()> {
        let cs = u64::from(self.cell_size);
        let width = u64::from(cols) * cs + 1;
        let height = u64::from(rows) * cs + 1;
        let too_large = RasterError::SurfaceTooLarge {
            width,
            height,
            max: self.max_pixels,
        };

        let len = match width.checked_mul(height) {
            Some(pixels) if pixels <= self.max_pixels => pixels.checked_mul(4),
            _ => None,
        };
        let (Some(len), Ok(w), Ok(h)) = (
            len.and_then(|n| usize::try_from(n).ok()),
            u32::try_from(width),
            u32::try_from(height),
        ) else {
            return Err(too_large);
        };

        self.width = w;
        self.height = h;
        let bg = self.background.to_bytes();
        self.data = bg.iter().copied().cycle().take(len).collect();
        self.draw_lattice(cols, rows);
        Ok(())
    }

    fn fill_cell(&mut self, x: i32, y: i32, color: &Rgba8) {
        let cs = self.cell_size as i64;
        let x1 = x as i64 * cs;
        let y1 = y as i64 * cs;
        let x2 = x1 + cs;
        let y2 = y1 + cs;
        self.copy_bar(x1, y1, x2, y2, color);

        let stroke = self.cell_outline;
        self.copy_hline(x1, y1, x2, &stroke);
        self.copy_hline(x1, y2, x2, &stroke);
        self.copy_vline(x1, y1, y2, &stroke);
        self.copy_vline(x2, y1, y2, &stroke);
    }
}

// ============================================================================
// Tests
// ============================================================================
