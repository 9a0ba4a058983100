//! Template builders
//!
//! Each template lays the same resume data out on a fixed-width page.
//! Builders are pure: they read the data and return render items, and the
//! minimal template only reserves a [`RenderItem::ChartSlot`] for the skill
//! chart. Filling the slot is up to [`crate::PreviewView`].

mod classic;
mod column;
mod minimal;
mod modern;

use crate::locale::DisplayLocale;
use crate::render_item::{PreviewDocument, RenderItem};
use crate::style::{ColorScheme, Template};
use resume_model::ResumeData;

pub(crate) use column::{Column, TextStyle};

/// A4 at 72 dpi
pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;
/// Inner padding of the single-column templates
pub const PAGE_PADDING: f64 = 32.0;
/// Height reserved for the skill chart
pub const CHART_HEIGHT: f64 = 300.0;

pub(crate) mod sizes {
    pub const TITLE: f64 = 26.0;
    pub const SUBTITLE: f64 = 17.0;
    pub const HEADING: f64 = 15.0;
    pub const BODY: f64 = 11.0;
    pub const SMALL: f64 = 10.0;
}

/// Everything a builder needs besides the output buffer
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub data: &'a ResumeData,
    pub scheme: ColorScheme,
    pub locale: DisplayLocale,
    pub width: f64,
    pub height: f64,
}

impl<'a> TemplateContext<'a> {
    pub fn new(data: &'a ResumeData, scheme: ColorScheme, locale: DisplayLocale) -> Self {
        Self {
            data,
            scheme,
            locale,
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
        }
    }
}

impl Template {
    /// Lay out the page items for this template
    pub fn build(self, ctx: &TemplateContext<'_>) -> Vec<RenderItem> {
        let mut items = Vec::new();
        match self {
            Template::Modern => modern::build(ctx, &mut items),
            Template::Classic => classic::build(ctx, &mut items),
            Template::Minimal => minimal::build(ctx, &mut items),
        }
        items
    }
}

/// Render a full preview page (without an attached chart)
pub fn render_page(
    data: &ResumeData,
    template: Template,
    scheme: ColorScheme,
    locale: DisplayLocale,
) -> PreviewDocument {
    let ctx = TemplateContext::new(data, scheme, locale);
    let mut document = PreviewDocument::new(ctx.width, ctx.height);
    document.items = template.build(&ctx);
    document
}
