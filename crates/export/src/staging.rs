//! Off-screen staging of the preview page
//!
//! Capture never touches the live document. It works on a copy that has the
//! on-screen chrome stripped, no margin, and the fixed export size. The
//! staging area holds at most one copy; the guard returned by
//! [`StagingArea::stage`] discards it when dropped, whether capture
//! succeeded or not.

use crate::settings::ExportSettings;
use crate::{ExportError, Result};
use charts::Color;
use preview::{PreviewDocument, RenderItem};
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};

/// A fixed-size copy of the page, ready to rasterize
#[derive(Debug, Clone, PartialEq)]
pub struct StagedPage {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub items: Vec<RenderItem>,
}

impl StagedPage {
    /// Copy `document` for capture
    pub fn from_document(document: &PreviewDocument, settings: &ExportSettings) -> Self {
        Self {
            width: f64::from(settings.page_width),
            height: f64::from(settings.page_height),
            background: settings.background_color(),
            items: document
                .items
                .iter()
                .filter(|item| !item.is_chrome())
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct StagingArea {
    occupied: AtomicBool,
}

impl StagingArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied.load(Ordering::Acquire)
    }

    /// Place a copy of `document` in the staging area
    pub fn stage(&self, document: &PreviewDocument, settings: &ExportSettings) -> Result<StagedCopy<'_>> {
        if self
            .occupied
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ExportError::Staging("staging area already holds a copy".to_string()));
        }

        let page = StagedPage::from_document(document, settings);
        tracing::debug!(
            "Staged {}x{} copy ({} of {} items kept)",
            page.width,
            page.height,
            page.items.len(),
            document.items.len()
        );
        Ok(StagedCopy { area: self, page })
    }
}

/// The staged copy; dropping it empties the staging area
#[derive(Debug)]
pub struct StagedCopy<'a> {
    area: &'a StagingArea,
    page: StagedPage,
}

impl Deref for StagedCopy<'_> {
    type Target = StagedPage;

    fn deref(&self) -> &StagedPage {
        &self.page
    }
}

impl Drop for StagedCopy<'_> {
    fn drop(&mut self) {
        self.area.occupied.store(false, Ordering::Release);
        tracing::debug!("Staged copy discarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preview::{ColorScheme, DisplayLocale, PreviewView, Template};
    use resume_model::sample_resume;

    fn live_document() -> PreviewDocument {
        PreviewView::mount(
            sample_resume(),
            Template::Modern,
            ColorScheme::Blue,
            DisplayLocale::En,
        )
        .document()
        .clone()
    }

    #[test]
    fn test_copy_strips_chrome_and_margin() {
        let document = live_document();
        assert!(document.items.iter().any(RenderItem::is_chrome));

        let page = StagedPage::from_document(&document, &ExportSettings::default());
        assert!(!page.items.iter().any(RenderItem::is_chrome));
        assert_eq!(page.items.len(), document.items.len() - 1);
        assert_eq!((page.width, page.height), (595.0, 842.0));
        assert_eq!(page.background, Color::WHITE);
    }

    #[test]
    fn test_live_document_untouched() {
        let document = live_document();
        let before = document.clone();
        let area = StagingArea::new();
        drop(area.stage(&document, &ExportSettings::default()).unwrap());
        assert_eq!(document, before);
    }

    #[test]
    fn test_single_copy_at_a_time() {
        let document = live_document();
        let settings = ExportSettings::default();
        let area = StagingArea::new();

        let copy = area.stage(&document, &settings).unwrap();
        assert!(area.is_occupied());
        assert!(matches!(
            area.stage(&document, &settings),
            Err(ExportError::Staging(_))
        ));

        drop(copy);
        assert!(!area.is_occupied());
        assert!(area.stage(&document, &settings).is_ok());
    }
}
