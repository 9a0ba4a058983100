//! Image XObjects

use super::objects::{PdfDictionary, PdfObject, PdfStream};
use super::writer::{PdfError, Result};

/// An 8-bit DeviceRGB image ready to embed
#[derive(Debug, Clone)]
pub struct ImageXObject {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl ImageXObject {
    /// Wrap packed RGB samples, rejecting a buffer of the wrong length
    pub fn from_rgb(width: u32, height: u32, rgb: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PdfError::InvalidDocument(format!(
                "Image has no pixels ({}x{})",
                width, height
            )));
        }
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(PdfError::InvalidDocument(format!(
                "Image data is {} bytes, expected {}",
                rgb.len(),
                expected
            )));
        }
        Ok(Self { width, height, rgb })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn to_stream(&self) -> PdfStream {
        let dict = PdfDictionary::typed("XObject")
            .with("Subtype", PdfObject::name("Image"))
            .with("Width", self.width)
            .with("Height", self.height)
            .with("ColorSpace", PdfObject::name("DeviceRGB"))
            .with("BitsPerComponent", 8i64);
        PdfStream::new(dict, self.rgb.clone())
    }
}
