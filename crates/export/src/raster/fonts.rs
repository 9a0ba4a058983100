//! Font lookup for page text and chart labels
//!
//! One [`FontBook`] backs both text paths of the rasterizer: glyphs drawn
//! directly from page text runs, and labels inside chart SVG rendered by
//! resvg. Both resolve faces from the same database so they match.

use resvg::usvg::fontdb::{Database, Family, Query, Style, Weight, ID};
use resvg::usvg::Options;
use std::path::Path;
use std::sync::Arc;
use swash::FontRef;

/// Families tried in order when no font file is configured. Each covers
/// Latin and Cyrillic.
const PREFERRED_FAMILIES: [&str; 6] = [
    "DejaVu Sans",
    "Noto Sans",
    "Liberation Sans",
    "Arial",
    "Helvetica",
    "Verdana",
];

/// A resolved face plus the styling that has to be synthesized on top of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceChoice {
    pub id: ID,
    /// Bold was asked for but the face is regular weight
    pub embolden: bool,
    /// Italic was asked for but the face is upright
    pub oblique: bool,
}

/// Loaded font faces and the family used for text
#[derive(Clone)]
pub struct FontBook {
    db: Arc<Database>,
    family: Option<String>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.db.len())
            .field("family", &self.family)
            .finish()
    }
}

impl FontBook {
    /// System fonts only
    pub fn system() -> Self {
        Self::load(None)
    }

    /// System fonts, with the family of `font_file` taking precedence
    pub fn load(font_file: Option<&Path>) -> Self {
        let mut db = Database::new();
        if let Some(path) = font_file {
            if let Err(e) = db.load_font_file(path) {
                tracing::warn!("Failed to load font {}: {}", path.display(), e);
            }
        }
        let configured = first_family(&db);
        db.load_system_fonts();
        Self::from_database(db, configured)
    }

    /// Use an already populated database. Without `family`, the first
    /// preferred family present is picked, then any family at all.
    pub fn from_database(mut db: Database, family: Option<String>) -> Self {
        let family = family
            .or_else(|| {
                PREFERRED_FAMILIES
                    .iter()
                    .find(|name| has_family(&db, name))
                    .map(|name| name.to_string())
            })
            .or_else(|| first_family(&db));

        match &family {
            Some(name) => {
                db.set_sans_serif_family(name.clone());
                tracing::debug!("{} font faces loaded, text uses {}", db.len(), name);
            }
            None => tracing::warn!("No fonts found, exported text will fail to render"),
        }

        Self {
            db: Arc::new(db),
            family,
        }
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Closest face to the requested style
    pub fn face(&self, bold: bool, italic: bool) -> Option<FaceChoice> {
        let family = self.family.as_deref()?;
        let query = Query {
            families: &[Family::Name(family), Family::SansSerif],
            weight: if bold { Weight::BOLD } else { Weight::NORMAL },
            style: if italic { Style::Italic } else { Style::Normal },
            ..Query::default()
        };
        let id = self.db.query(&query)?;
        let info = self.db.face(id)?;
        Some(FaceChoice {
            id,
            embolden: bold && info.weight.0 < Weight::SEMIBOLD.0,
            oblique: italic && info.style == Style::Normal,
        })
    }

    /// Run `f` against the face data of `id`
    pub fn with_face<T>(&self, id: ID, f: impl FnOnce(FontRef<'_>) -> T) -> Option<T> {
        self.db
            .with_face_data(id, |data, index| FontRef::from_index(data, index as usize).map(f))
            .flatten()
    }

    /// SVG parsing options that resolve text against this book
    pub fn svg_options(&self) -> Options<'static> {
        let mut options = Options::default();
        options.fontdb = Arc::clone(&self.db);
        if let Some(family) = &self.family {
            options.font_family = family.clone();
        }
        options
    }
}

fn has_family(db: &Database, name: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(family, _)| family == name))
}

fn first_family(db: &Database) -> Option<String> {
    db.faces()
        .find_map(|face| face.families.first())
        .map(|(family, _)| family.clone())
}
