//! Minimal PDF output for a single full-bleed image page

mod content;
mod document;
mod image;
mod objects;
mod writer;

pub use content::ContentStream;
pub use document::{DocumentInfo, MediaBox, Orientation, PageGeometry, PageUnit};
pub use image::ImageXObject;
pub use objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
pub use writer::{ImagePageWriter, PdfError, PdfWriter, Result};
