//=========================================================================
// Canvas
//=========================================================================
//
// CPU framebuffer the window surface draws into before presenting.
//
// Pixel format: 0x00RRGGBB, row-major, `width * height` entries.
// Everything is clipped to the canvas; shapes that are partly or fully
// off-screen are simply cut.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::font::RasterGlyph;
use crate::core::geometry::{Bounds, Rgb, Vec2};
use crate::core::primitives::{ShapeGeometry, ShapePrimitive, Transformable};

//=== Canvas ==============================================================

/// Packed `u32` pixel buffer.
pub(crate) struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK.to_u32(); width * height],
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_u32());
    }

    //--- Shapes -----------------------------------------------------------

    pub fn draw_shape(&mut self, shape: &ShapePrimitive) {
        let color = shape.fill_color();
        match shape.geometry() {
            ShapeGeometry::Circle { radius } => {
                let center = shape.position() + Vec2::new(radius, radius);
                self.fill_circle(center, radius, color);
            }
            ShapeGeometry::Rectangle { .. } => {
                self.fill_rect(shape.global_bounds(), color);
            }
        }
    }

    /// Fills every pixel whose center lies inside `bounds`.
    pub fn fill_rect(&mut self, bounds: Bounds, color: Rgb) {
        let (x0, x1) = Self::clip_span(bounds.left, bounds.right(), self.width);
        let (y0, y1) = Self::clip_span(bounds.top, bounds.bottom(), self.height);
        let packed = color.to_u32();

        for row in y0..y1 {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(packed);
        }
    }

    /// Fills every pixel whose center lies inside the circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        let (x0, x1) = Self::clip_span(center.x - radius, center.x + radius, self.width);
        let (y0, y1) = Self::clip_span(center.y - radius, center.y + radius, self.height);
        let packed = color.to_u32();
        let radius_sq = radius * radius;

        for py in y0..y1 {
            let dy = py as f32 + 0.5 - center.y;
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= radius_sq {
                    self.pixels[py * self.width + px] = packed;
                }
            }
        }
    }

    //--- Text -------------------------------------------------------------

    /// Blends glyph coverage onto the canvas, offset by `origin`.
    pub fn draw_glyphs(&mut self, origin: Vec2, glyphs: &[RasterGlyph], color: Rgb) {
        for glyph in glyphs {
            let left = (origin.x + glyph.x).round() as isize;
            let top = (origin.y + glyph.y).round() as isize;

            for (row, line) in glyph.coverage.chunks(glyph.width.max(1)).enumerate() {
                for (col, &alpha) in line.iter().enumerate() {
                    self.blend(left + col as isize, top + row as isize, color, alpha);
                }
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Pixel index range `[start, end)` whose centers fall in `[from, to)`.
    fn clip_span(from: f32, to: f32, limit: usize) -> (usize, usize) {
        let start = (from - 0.5).ceil().max(0.0) as usize;
        let end = ((to - 0.5).ceil().max(0.0) as usize).min(limit);
        (start.min(end), end)
    }

    fn blend(&mut self, x: isize, y: isize, color: Rgb, alpha: u8) {
        if alpha == 0 || x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }

        let index = y as usize * self.width + x as usize;
        let dst = self.pixels[index];
        let a = u32::from(alpha);
        let mix = |src: u8, shift: u32| -> u32 {
            let dst = (dst >> shift) & 0xFF;
            (u32::from(src) * a + dst * (255 - a)) / 255
        };

        self.pixels[index] = (mix(color.r, 16) << 16) | (mix(color.g, 8) << 8) | mix(color.b, 0);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
