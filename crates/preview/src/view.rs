//! Preview view
//!
//! Keeps a [`PreviewDocument`] in sync with the form state and the three
//! selectors (template, color scheme, locale). The minimal template's skill
//! chart is a scoped resource: it is acquired when the minimal template is
//! shown with at least one skill and released on every exit path (template
//! change, skills emptied, unmount, drop). A change to the skill collection,
//! color scheme, or locale releases the old surface and acquires a new one.

use crate::error::{PreviewError, Result};
use crate::locale::DisplayLocale;
use crate::render_item::{PreviewDocument, Rect, RenderItem};
use crate::style::{palette, ColorScheme, Template};
use crate::templates::{render_page, CHART_HEIGHT, PAGE_PADDING, PAGE_WIDTH};
use charts::{ChartSurface, RadarChart, RadarIndicator, RadarSeries};
use resume_model::{ResumeData, SkillEntry};
use std::sync::Arc;

/// On-screen gap around the page in the preview pane
pub const PREVIEW_MARGIN: f64 = 24.0;

/// Offset of the drop shadow under the page
const SHADOW_OFFSET: f64 = 4.0;

/// Build the skill radar: one axis per skill on a 0–100 scale
pub fn skill_chart(skills: &[SkillEntry], scheme: ColorScheme, locale: DisplayLocale) -> RadarChart {
    let mut chart = skills
        .iter()
        .fold(RadarChart::new(), |chart, skill| {
            chart.with_indicator(RadarIndicator::new(skill.name.clone(), 100.0))
        });
    chart.add_series(
        RadarSeries::new(
            locale.skills_series(),
            skills.iter().map(|s| f64::from(s.clamped_level())).collect(),
        )
        .with_line_color(scheme.chart_line())
        .with_area_color(scheme.chart_area()),
    );
    chart
}

/// A live chart together with the inputs it was built from
#[derive(Debug)]
struct SkillChart {
    surface: ChartSurface,
    skills: Arc<Vec<SkillEntry>>,
    scheme: ColorScheme,
    locale: DisplayLocale,
}

/// The preview pane
#[derive(Debug)]
pub struct PreviewView {
    template: Template,
    scheme: ColorScheme,
    locale: DisplayLocale,
    data: ResumeData,
    document: PreviewDocument,
    chart: Option<SkillChart>,
    chart_width: f64,
    mounted: bool,
    surfaces_created: u64,
}

impl PreviewView {
    /// Mount the view and render the first page
    pub fn mount(
        data: ResumeData,
        template: Template,
        scheme: ColorScheme,
        locale: DisplayLocale,
    ) -> Self {
        let mut view = Self {
            template,
            scheme,
            locale,
            document: PreviewDocument::new(0.0, 0.0),
            data,
            chart: None,
            chart_width: PAGE_WIDTH - PAGE_PADDING * 2.0,
            mounted: true,
            surfaces_created: 0,
        };
        view.refresh();
        view
    }

    pub fn template(&self) -> Template {
        self.template
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn locale(&self) -> DisplayLocale {
        self.locale
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The current page, with the chart attached when one is live
    pub fn document(&self) -> &PreviewDocument {
        &self.document
    }

    /// The data the current page was rendered from
    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    /// The live chart surface, if any
    pub fn chart_surface(&self) -> Option<&ChartSurface> {
        self.chart.as_ref().map(|c| &c.surface)
    }

    /// How many chart surfaces this view has acquired so far
    pub fn surfaces_created(&self) -> u64 {
        self.surfaces_created
    }

    /// Store change notification
    pub fn update(&mut self, data: ResumeData) {
        self.data = data;
        self.refresh();
    }

    pub fn set_template(&mut self, template: Template) {
        if self.template != template {
            self.template = template;
            self.refresh();
        }
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        if self.scheme != scheme {
            self.scheme = scheme;
            self.refresh();
        }
    }

    pub fn set_locale(&mut self, locale: DisplayLocale) {
        if self.locale != locale {
            self.locale = locale;
            self.refresh();
        }
    }

    /// Viewport resize; the page shrinks below its natural width and the chart re-lays out
    pub fn resize(&mut self, viewport_width: f64) {
        let page_width = (viewport_width - PREVIEW_MARGIN * 2.0).clamp(0.0, PAGE_WIDTH);
        self.chart_width = (page_width - PAGE_PADDING * 2.0).max(0.0);

        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        if let Err(e) = chart.surface.resize(self.chart_width, CHART_HEIGHT) {
            tracing::warn!("Skill chart resize failed: {}", e);
        }
        self.document.attach_chart(chart.surface.rendered());
    }

    /// Tear the view down, releasing the chart surface
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.release_chart();
        tracing::debug!("Preview unmounted");
    }

    fn refresh(&mut self) {
        if !self.mounted {
            return;
        }
        let mut document = render_page(&self.data, self.template, self.scheme, self.locale);
        document.margin = PREVIEW_MARGIN;
        document.items.insert(
            0,
            RenderItem::Rectangle {
                bounds: Rect::new(SHADOW_OFFSET, SHADOW_OFFSET, document.width, document.height),
                fill: palette::SHADOW,
                corner_radius: 4.0,
                chrome: true,
            },
        );
        self.document = document;
        self.sync_chart();
    }

    fn chart_wanted(&self) -> bool {
        self.mounted && self.template.uses_skill_chart() && !self.data.skills.is_empty()
    }

    fn sync_chart(&mut self) {
        let stale = self.chart.as_ref().is_some_and(|chart| {
            !self.chart_wanted()
                || !Arc::ptr_eq(&chart.skills, &self.data.skills)
                || chart.scheme != self.scheme
                || chart.locale != self.locale
        });
        if stale {
            self.release_chart();
        }

        if self.chart.is_none() && self.chart_wanted() {
            if let Err(e) = self.acquire_chart() {
                tracing::warn!("Skill chart unavailable: {}", e);
            }
        }

        let rendered = self.chart.as_ref().and_then(|c| c.surface.rendered());
        self.document.attach_chart(rendered);
    }

    fn acquire_chart(&mut self) -> Result<()> {
        if !self.mounted {
            return Err(PreviewError::NotMounted);
        }
        let mut surface = ChartSurface::init(self.chart_width, CHART_HEIGHT);
        surface.set_option(skill_chart(&self.data.skills, self.scheme, self.locale))?;
        self.surfaces_created += 1;
        tracing::debug!(
            surface = surface.id(),
            skills = self.data.skills.len(),
            "Skill chart acquired"
        );
        self.chart = Some(SkillChart {
            surface,
            skills: Arc::clone(&self.data.skills),
            scheme: self.scheme,
            locale: self.locale,
        });
        Ok(())
    }

    fn release_chart(&mut self) {
        if let Some(mut chart) = self.chart.take() {
            chart.surface.dispose();
            self.document.attach_chart(None);
        }
    }
}

impl Drop for PreviewView {
    fn drop(&mut self) {
        self.unmount();
    }
}
