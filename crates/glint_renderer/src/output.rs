//! Pixel sinks: where finished colors go.
//!
//! The renderer hands each sink colors that are already averaged,
//! gamma-corrected and clamped to [0, 1], top row first.

use std::convert::Infallible;
use std::io::Write;

use crate::error::RenderError;
use crate::Color;

/// Receives rendered pixels in scan order.
pub trait PixelSink {
    type Error;

    /// Called once before the first pixel.
    fn begin(&mut self, width: u32, height: u32) -> Result<(), Self::Error>;

    /// Called once per pixel, top row first, left to right.
    fn put(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Called once after the last pixel.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Quantize a [0, 1] channel to 0-255.
#[inline]
pub fn quantize(channel: f32) -> u8 {
    // `as` saturates, so out-of-range input still lands in 0..=255
    (255.999 * channel) as u8
}

/// Quantize a color to an 8-bit RGB triple.
#[inline]
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Row-major index of pixel `(x, y)`, widened before multiplying.
#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// In-memory image buffer.
///
/// Rows are stored top row first, so `get(x, 0)` is on the top row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Get the pixel at column `x` of row `y`, counting rows from the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[pixel_index(self.width, x, y)]
    }

    /// Convert to packed RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&c| color_to_rgb8(c)).collect()
    }
}

impl PixelSink for ImageBuffer {
    type Error = Infallible;

    fn begin(&mut self, width: u32, height: u32) -> Result<(), Infallible> {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.reserve(width as usize * height as usize);
        Ok(())
    }

    fn put(&mut self, color: Color) -> Result<(), Infallible> {
        self.pixels.push(color);
        Ok(())
    }
}

/// Plain-text PPM (P3) writer.
pub struct PpmWriter<W: Write> {
    writer: W,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PixelSink for PpmWriter<W> {
    type Error = RenderError;

    fn begin(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        writeln!(self.writer, "P3")?;
        writeln!(self.writer, "{} {}", width, height)?;
        writeln!(self.writer, "255")?;
        Ok(())
    }

    fn put(&mut self, color: Color) -> Result<(), RenderError> {
        let [r, g, b] = color_to_rgb8(color);
        writeln!(self.writer, "{} {} {}", r, g, b)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.writer.flush()?;
        Ok(())
    }
}
