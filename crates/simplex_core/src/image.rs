//! Linear RGB pixel buffer produced by a render.

use simplex_math::Interval;

use crate::Color;

/// Scale applied before truncating a [0, 1] channel to 8 bits.
const QUANTIZE_SCALE: f32 = 255.99;

/// A `width x height` grid of linear RGB colors, row-major, row 0 on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Quantize every pixel to 8-bit RGB triples, in pixel order.
    pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
        self.pixels.iter().map(|c| color_to_rgb8(*c)).collect()
    }
}

/// Convert a linear color to 8 bits per channel.
///
/// Channels are clamped to [0, 1], scaled by 255.99 and truncated. No gamma
/// curve is applied.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (QUANTIZE_SCALE * Interval::UNIT.clamp(c)) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}
