//! PDF file writer
//!
//! Handles object numbering, byte offsets, the cross-reference table and
//! trailer. Streams are flate-compressed unless compression is switched off.

use super::content::ContentStream;
use super::document::{create_catalog, create_pages, DocumentInfo, PageGeometry};
use super::image::ImageXObject;
use super::objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

const PDF_VERSION: &str = "1.4";
const IMAGE_NAME: &str = "Im1";

/// Low-level writer tracking where each indirect object starts
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// (object number, byte offset)
    offsets: Vec<(u32, u64)>,
    next_obj_num: u32,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_obj_num: 1,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    /// Version line followed by a comment of high bytes marking the file binary
    pub fn write_header(&mut self) -> Result<()> {
        self.write_bytes(format!("%PDF-{}\n", PDF_VERSION).as_bytes())?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    pub fn write_object(&mut self, obj_num: u32, object: &PdfObject) -> Result<()> {
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(object)?;
        self.write_indirect(obj_num, &serializer.into_inner())
    }

    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress && !stream.compressed {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&stream.data)?;
            stream.data = encoder.finish()?;
            stream.compressed = true;
            stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
        }
        stream.dict.insert("Length", stream.data.len() as i64);

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_stream(&stream)?;
        self.write_indirect(obj_num, &serializer.into_inner())
    }

    fn write_indirect(&mut self, obj_num: u32, body: &[u8]) -> Result<()> {
        self.offsets.push((obj_num, self.position));
        self.write_bytes(format!("{} 0 obj\n", obj_num).as_bytes())?;
        self.write_bytes(body)?;
        self.write_bytes(b"\nendobj\n")
    }

    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: Option<u32>) -> Result<()> {
        let xref_offset = self.position;
        self.offsets.sort_by_key(|(num, _)| *num);

        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", self.next_obj_num);
        let mut expected = 1u32;
        for (num, offset) in &self.offsets {
            while expected < *num {
                table.push_str("0000000000 65535 f \n");
                expected += 1;
            }
            table.push_str(&format!("{:010} 00000 n \n", offset));
            expected = num + 1;
        }
        table.push_str("trailer\n");
        self.write_bytes(table.as_bytes())?;

        let mut trailer = PdfDictionary::new()
            .with("Size", self.next_obj_num)
            .with("Root", PdfObject::reference(catalog_ref));
        if let Some(info) = info_ref {
            trailer.insert("Info", PdfObject::reference(info));
        }
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&trailer.into())?;
        self.write_bytes(&serializer.into_inner())?;

        self.write_bytes(format!("\nstartxref\n{}\n%%EOF\n", xref_offset).as_bytes())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Writes a one-page document whose only content is an image covering the page
pub struct ImagePageWriter {
    geometry: PageGeometry,
    info: DocumentInfo,
    compress: bool,
}

impl ImagePageWriter {
    pub fn new(geometry: PageGeometry, info: DocumentInfo) -> Self {
        Self {
            geometry,
            info,
            compress: true,
        }
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn write<W: Write>(&self, image: &ImageXObject, writer: W) -> Result<W> {
        let media_box = self.geometry.media_box();
        let mut pdf = PdfWriter::new(writer);
        pdf.set_compression(self.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let page_ref = pdf.allocate_object();
        let content_ref = pdf.allocate_object();
        let image_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();

        pdf.write_object(catalog_ref, &create_catalog(pages_ref).into())?;
        pdf.write_object(pages_ref, &create_pages(&[page_ref]).into())?;

        let resources = PdfDictionary::new().with(
            "XObject",
            PdfDictionary::new().with(IMAGE_NAME, PdfObject::reference(image_ref)),
        );
        let page = PdfDictionary::typed("Page")
            .with("Parent", PdfObject::reference(pages_ref))
            .with("MediaBox", media_box.to_array())
            .with("Resources", resources)
            .with("Contents", PdfObject::reference(content_ref));
        pdf.write_object(page_ref, &page.into())?;

        let mut content = ContentStream::new();
        content.draw_image(IMAGE_NAME, 0.0, 0.0, media_box.width, media_box.height);
        pdf.write_stream_object(content_ref, PdfStream::new(PdfDictionary::new(), content.into_bytes()))?;
        pdf.write_stream_object(image_ref, image.to_stream())?;
        pdf.write_object(info_ref, &self.info.to_dictionary().into())?;

        pdf.write_xref_and_trailer(catalog_ref, Some(info_ref))?;
        pdf.finish()
    }

    pub fn to_bytes(&self, image: &ImageXObject) -> Result<Vec<u8>> {
        self.write(image, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn sample_image() -> ImageXObject {
        ImageXObject::from_rgb(4, 2, vec![200; 24]).unwrap()
    }

    fn uncompressed(image: &ImageXObject) -> String {
        let bytes = ImagePageWriter::new(PageGeometry::a4_portrait(), DocumentInfo::new("Test"))
            .with_compression(false)
            .to_bytes(image)
            .unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn test_header_and_trailer() {
        let text = uncompressed(&sample_image());
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains("/Root 1 0 R"));
        assert!(text.contains("/Info 6 0 R"));
        assert!(text.contains("xref\n0 7\n"));
    }

    #[test]
    fn test_single_full_bleed_page() {
        let text = uncompressed(&sample_image());
        assert_eq!(text.matches("/Type /Page ").count(), 1);
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/MediaBox [0 0 595.2756 841.8898]"));
        assert!(text.contains("595.2756 0 0 841.8898 0 0 cm\n/Im1 Do"));
        assert!(text.contains("/Subtype /Image"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = ImagePageWriter::new(PageGeometry::a4_portrait(), DocumentInfo::default())
            .to_bytes(&sample_image())
            .unwrap();
        let text = String::from_utf8_lossy(&bytes);
        let xref_at = text.rfind("\nxref\n").unwrap() + 1;
        let entries: Vec<&str> = text[xref_at..].lines().skip(3).take(6).collect();
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let header = format!("{} 0 obj", i + 1);
            assert!(bytes[offset..].starts_with(header.as_bytes()), "object {}", i + 1);
        }
    }

    #[test]
    fn test_streams_are_flate_compressed() {
        let image = sample_image();
        let mut pdf = PdfWriter::new(Vec::new());
        let num = pdf.allocate_object();
        pdf.write_stream_object(num, image.to_stream()).unwrap();
        let bytes = pdf.finish().unwrap();

        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Filter /FlateDecode"));

        let start = bytes.windows(7).position(|w| w == b"stream\n").unwrap() + 7;
        let end = bytes.windows(10).position(|w| w == b"\nendstream").unwrap();
        let mut decoded = Vec::new();
        ZlibDecoder::new(&bytes[start..end]).read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, vec![200; 24]);
    }
}
