//! Rasterization of a staged page
//!
//! [`RasterCapture`] is the seam to whatever turns a staged page into
//! pixels. [`SoftwareRasterizer`] is the built-in implementation; it paints
//! on a blocking worker so the async runtime stays responsive.

mod fonts;
mod glyphs;
mod software;

pub use fonts::{FaceChoice, FontBook};
pub use glyphs::{GlyphPainter, GlyphStyle};
pub use software::SoftwareRasterizer;

use crate::staging::StagedPage;
use crate::{ExportError, Result};
use charts::Color;
use std::future::Future;

/// How the staged page is captured
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    /// Page width in CSS pixels
    pub width: u32,
    /// Page height in CSS pixels
    pub height: u32,
    /// Device pixels per CSS pixel
    pub scale: f64,
    pub background: Color,
}

impl CaptureOptions {
    /// Size of the produced bitmap in device pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let scaled = |v: u32| (f64::from(v) * self.scale).round().max(1.0) as u32;
        (scaled(self.width), scaled(self.height))
    }
}

/// Packed 8-bit RGB pixels, row-major from the top-left
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(ExportError::Raster(format!(
                "{} bytes for a {}x{} image, expected {}",
                pixels.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }
}

/// Turns a staged page into a bitmap
pub trait RasterCapture: Send + Sync {
    fn capture(
        &self,
        page: &StagedPage,
        options: &CaptureOptions,
    ) -> impl Future<Output = Result<RasterImage>> + Send;
}
