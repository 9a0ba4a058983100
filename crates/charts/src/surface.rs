//! Disposable chart surfaces
//!
//! A [`ChartSurface`] owns the rendered output of one chart bound to a
//! fixed-size drawing area. It must be disposed when its host goes away;
//! dropping a live surface disposes it.

use crate::error::{ChartError, ChartResult};
use crate::model::RadarChart;
use crate::render::{ChartRenderer, RenderedChart};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// A live chart render target
#[derive(Debug)]
pub struct ChartSurface {
    id: u64,
    width: f64,
    height: f64,
    option: Option<RadarChart>,
    rendered: Option<RenderedChart>,
    disposed: bool,
}

impl ChartSurface {
    /// Bind a new surface to a drawing area of the given size
    pub fn init(width: f64, height: f64) -> Self {
        let id = NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(surface = id, width, height, "chart surface created");
        Self {
            id,
            width,
            height,
            option: None,
            rendered: None,
            disposed: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Current chart definition, if one was set
    pub fn option(&self) -> Option<&RadarChart> {
        self.option.as_ref()
    }

    /// Latest rendered output
    pub fn rendered(&self) -> Option<&RenderedChart> {
        self.rendered.as_ref()
    }

    /// Replace the chart definition and re-render
    pub fn set_option(&mut self, chart: RadarChart) -> ChartResult<()> {
        self.ensure_live()?;
        let rendered = ChartRenderer::new().render(&chart, self.width, self.height)?;
        self.option = Some(chart);
        self.rendered = Some(rendered);
        Ok(())
    }

    /// Re-render the current chart at a new size
    pub fn resize(&mut self, width: f64, height: f64) -> ChartResult<()> {
        self.ensure_live()?;
        self.width = width;
        self.height = height;
        if let Some(chart) = &self.option {
            self.rendered = Some(ChartRenderer::new().render(chart, width, height)?);
        }
        tracing::trace!(surface = self.id, width, height, "chart surface resized");
        Ok(())
    }

    /// Release the surface; later calls other than `dispose` fail
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.option = None;
        self.rendered = None;
        tracing::debug!(surface = self.id, "chart surface disposed");
    }

    fn ensure_live(&self) -> ChartResult<()> {
        if self.disposed {
            Err(ChartError::Disposed(self.id))
        } else {
            Ok(())
        }
    }
}

impl Drop for ChartSurface {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RadarIndicator, RadarSeries};

    fn chart() -> RadarChart {
        let mut chart = RadarChart::new()
            .with_indicator(RadarIndicator::new("a", 100.0))
            .with_indicator(RadarIndicator::new("b", 100.0))
            .with_indicator(RadarIndicator::new("c", 100.0));
        chart.add_series(RadarSeries::new("Skills", vec![10.0, 20.0, 30.0]));
        chart
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ChartSurface::init(100.0, 100.0);
        let b = ChartSurface::init(100.0, 100.0);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_set_option_renders() {
        let mut surface = ChartSurface::init(400.0, 300.0);
        assert!(surface.rendered().is_none());
        surface.set_option(chart()).unwrap();
        assert_eq!(surface.rendered().unwrap().width, 400.0);
    }

    #[test]
    fn test_resize_rerenders() {
        let mut surface = ChartSurface::init(400.0, 300.0);
        surface.set_option(chart()).unwrap();
        surface.resize(200.0, 150.0).unwrap();
        assert_eq!(surface.size(), (200.0, 150.0));
        assert_eq!(surface.rendered().unwrap().height, 150.0);
    }

    #[test]
    fn test_disposed_surface_rejects_updates() {
        let mut surface = ChartSurface::init(100.0, 100.0);
        surface.set_option(chart()).unwrap();
        surface.dispose();
        assert!(surface.is_disposed());
        assert!(surface.rendered().is_none());
        assert_eq!(
            surface.set_option(chart()),
            Err(ChartError::Disposed(surface.id()))
        );
        assert!(surface.resize(10.0, 10.0).is_err());
        // Disposing twice is harmless
        surface.dispose();
    }
}
