//! PDF object model
//!
//! Only the object kinds an image-only document needs are modelled. Streams
//! are kept apart from plain objects since only the writer emits them.

use std::collections::BTreeMap;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Integer(i64),
    Real(f64),
    /// Literal string, escaped on output
    String(Vec<u8>),
    /// Name object, written with a leading `/`
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    /// Indirect reference to an object number (generation 0)
    Reference(u32),
}

impl PdfObject {
    pub fn name(name: impl Into<String>) -> Self {
        PdfObject::Name(name.into())
    }

    /// A text string: ASCII as is, anything else as UTF-16BE with a byte order mark
    pub fn text(text: &str) -> Self {
        if text.is_ascii() {
            return PdfObject::String(text.as_bytes().to_vec());
        }
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
        PdfObject::String(bytes)
    }

    pub fn reference(obj_num: u32) -> Self {
        PdfObject::Reference(obj_num)
    }
}

impl From<i64> for PdfObject {
    fn from(value: i64) -> Self {
        PdfObject::Integer(value)
    }
}

impl From<u32> for PdfObject {
    fn from(value: u32) -> Self {
        PdfObject::Integer(i64::from(value))
    }
}

impl From<f64> for PdfObject {
    fn from(value: f64) -> Self {
        PdfObject::Real(value)
    }
}

impl From<PdfDictionary> for PdfObject {
    fn from(value: PdfDictionary) -> Self {
        PdfObject::Dictionary(value)
    }
}

/// Dictionary with deterministic key order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary whose `/Type` entry is already set
    pub fn typed(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.insert("Type", PdfObject::name(type_name));
        dict
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PdfObject>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PdfObject>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PdfObject)> {
        self.entries.iter()
    }
}

/// Stream dictionary plus raw bytes
#[derive(Debug, Clone)]
pub struct PdfStream {
    pub dict: PdfDictionary,
    pub data: Vec<u8>,
    /// Whether `data` already carries a filter
    pub compressed: bool,
}

impl PdfStream {
    pub fn new(dict: PdfDictionary, data: Vec<u8>) -> Self {
        Self {
            dict,
            data,
            compressed: false,
        }
    }
}

/// Writes PDF objects in their textual syntax
pub struct PdfSerializer<W: Write> {
    writer: W,
}

impl<W: Write> PdfSerializer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_object(&mut self, obj: &PdfObject) -> io::Result<()> {
        match obj {
            PdfObject::Integer(n) => write!(self.writer, "{}", n),
            PdfObject::Real(n) => write!(self.writer, "{}", format_real(*n)),
            PdfObject::String(data) => self.write_string(data),
            PdfObject::Name(name) => self.write_name(name),
            PdfObject::Array(items) => {
                write!(self.writer, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(self.writer, " ")?;
                    }
                    self.write_object(item)?;
                }
                write!(self.writer, "]")
            }
            PdfObject::Dictionary(dict) => self.write_dictionary(dict),
            PdfObject::Reference(num) => write!(self.writer, "{} 0 R", num),
        }
    }

    pub fn write_stream(&mut self, stream: &PdfStream) -> io::Result<()> {
        self.write_dictionary(&stream.dict)?;
        self.writer.write_all(b"\nstream\n")?;
        self.writer.write_all(&stream.data)?;
        self.writer.write_all(b"\nendstream")
    }

    fn write_string(&mut self, data: &[u8]) -> io::Result<()> {
        self.writer.write_all(b"(")?;
        for &byte in data {
            match byte {
                b'(' | b')' | b'\\' => write!(self.writer, "\\{}", byte as char)?,
                b'\n' => self.writer.write_all(b"\\n")?,
                b'\r' => self.writer.write_all(b"\\r")?,
                0x20..=0x7E => self.writer.write_all(&[byte])?,
                _ => write!(self.writer, "\\{:03o}", byte)?,
            }
        }
        self.writer.write_all(b")")
    }

    fn write_name(&mut self, name: &str) -> io::Result<()> {
        self.writer.write_all(b"/")?;
        for byte in name.bytes() {
            match byte {
                b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' => {
                    write!(self.writer, "#{:02X}", byte)?
                }
                0x21..=0x7E => self.writer.write_all(&[byte])?,
                _ => write!(self.writer, "#{:02X}", byte)?,
            }
        }
        Ok(())
    }

    fn write_dictionary(&mut self, dict: &PdfDictionary) -> io::Result<()> {
        self.writer.write_all(b"<<")?;
        for (key, value) in dict.iter() {
            self.writer.write_all(b" ")?;
            self.write_name(key)?;
            self.writer.write_all(b" ")?;
            self.write_object(value)?;
        }
        self.writer.write_all(b" >>")
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Real number without trailing zeros, at most four decimals
pub(crate) fn format_real(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let text = format!("{:.4}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
