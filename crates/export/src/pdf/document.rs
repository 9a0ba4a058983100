//! Document-level dictionaries and page geometry

use super::objects::{PdfDictionary, PdfObject};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

const POINTS_PER_INCH: f64 = 72.0;
const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageUnit {
    #[default]
    Mm,
    Pt,
}

impl PageUnit {
    fn to_points(self, value: f64) -> f64 {
        match self {
            PageUnit::Mm => value * POINTS_PER_INCH / MM_PER_INCH,
            PageUnit::Pt => value,
        }
    }
}

/// Page size as configured, in its own unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Short edge
    pub width: f64,
    /// Long edge
    pub height: f64,
    pub unit: PageUnit,
    pub orientation: Orientation,
}

impl PageGeometry {
    pub const fn a4_portrait() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            unit: PageUnit::Mm,
            orientation: Orientation::Portrait,
        }
    }

    /// Page width in points after orientation is applied
    pub fn width_pt(&self) -> f64 {
        match self.orientation {
            Orientation::Portrait => self.unit.to_points(self.width),
            Orientation::Landscape => self.unit.to_points(self.height),
        }
    }

    /// Page height in points after orientation is applied
    pub fn height_pt(&self) -> f64 {
        match self.orientation {
            Orientation::Portrait => self.unit.to_points(self.height),
            Orientation::Landscape => self.unit.to_points(self.width),
        }
    }

    pub fn media_box(&self) -> MediaBox {
        MediaBox {
            width: self.width_pt(),
            height: self.height_pt(),
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4_portrait()
    }
}

/// Page bounds in points, origin at lower-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaBox {
    pub width: f64,
    pub height: f64,
}

impl MediaBox {
    pub fn to_array(&self) -> PdfObject {
        PdfObject::Array(vec![
            0i64.into(),
            0i64.into(),
            self.width.into(),
            self.height.into(),
        ])
    }
}

/// Contents of the `/Info` dictionary
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Local>>,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            creator: Some("Resume Builder".to_string()),
            producer: Some(format!("resume-builder export {}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(Local::now()),
        }
    }

    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        if let Some(title) = &self.title {
            dict.insert("Title", PdfObject::text(title));
        }
        if let Some(creator) = &self.creator {
            dict.insert("Creator", PdfObject::text(creator));
        }
        if let Some(producer) = &self.producer {
            dict.insert("Producer", PdfObject::text(producer));
        }
        if let Some(date) = &self.creation_date {
            dict.insert("CreationDate", PdfObject::text(&pdf_date(date)));
        }
        dict
    }
}

/// PDF date string, e.g. `D:20240131093000+03'00'`
fn pdf_date(date: &DateTime<Local>) -> String {
    let offset = date.format("%z").to_string();
    let (hours, minutes) = offset.split_at(offset.len().min(3));
    format!("D:{}{}'{}'", date.format("%Y%m%d%H%M%S"), hours, minutes)
}

pub(crate) fn create_catalog(pages_ref: u32) -> PdfDictionary {
    PdfDictionary::typed("Catalog").with("Pages", PdfObject::reference(pages_ref))
}

pub(crate) fn create_pages(page_refs: &[u32]) -> PdfDictionary {
    let kids = page_refs.iter().map(|r| PdfObject::reference(*r)).collect();
    PdfDictionary::typed("Pages")
        .with("Kids", PdfObject::Array(kids))
        .with("Count", page_refs.len() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_a4_in_points() {
        let a4 = PageGeometry::a4_portrait();
        assert!((a4.width_pt() - 595.2756).abs() < 1e-3);
        assert!((a4.height_pt() - 841.8898).abs() < 1e-3);
    }

    #[test]
    fn test_landscape_swaps_edges() {
        let landscape = PageGeometry {
            orientation: Orientation::Landscape,
            ..PageGeometry::a4_portrait()
        };
        assert!(landscape.width_pt() > landscape.height_pt());
    }

    #[test]
    fn test_point_unit_is_identity() {
        let page = PageGeometry {
            width: 595.0,
            height: 842.0,
            unit: PageUnit::Pt,
            orientation: Orientation::Portrait,
        };
        assert_eq!(page.media_box(), MediaBox { width: 595.0, height: 842.0 });
    }

    #[test]
    fn test_pdf_date_format() {
        let date = Local.with_ymd_and_hms(2024, 1, 31, 9, 30, 0).unwrap();
        let text = pdf_date(&date);
        assert!(text.starts_with("D:20240131093000"));
        assert!(text.ends_with('\''));
    }

    #[test]
    fn test_document_info_dictionary() {
        let dict = DocumentInfo::new("Jane Doe").to_dictionary();
        assert_eq!(dict.get("Title"), Some(&PdfObject::text("Jane Doe")));
        assert!(dict.get("CreationDate").is_some());
    }

    #[test]
    fn test_pages_tree() {
        let pages = create_pages(&[3]);
        assert_eq!(pages.get("Count"), Some(&PdfObject::Integer(1)));
        assert_eq!(create_catalog(2).get("Pages"), Some(&PdfObject::Reference(2)));
    }
}
