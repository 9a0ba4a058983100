//! Built-in page painter
//!
//! Shapes are filled with imageproc when they land on whole pixels and with
//! tiny-skia otherwise. Text is shaped and scaled by swash; the skill chart
//! goes through its SVG form and resvg. All of it draws into one RGBA image.

use super::fonts::FontBook;
use super::glyphs::{GlyphPainter, GlyphStyle};
use super::{CaptureOptions, RasterCapture, RasterImage};
use crate::settings::ExportSettings;
use crate::staging::StagedPage;
use crate::{ExportError, Result};
use charts::{Color, RenderedChart};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use preview::{Rect, RenderItem, TextAlign, TextRun};
use resvg::tiny_skia::{self, FillRule, Paint, PathBuilder, PixmapMut, Stroke, Transform};
use resvg::usvg::Tree;
use std::future::Future;
use std::sync::Arc;

/// Largest bitmap the painter will allocate, in pixels
const MAX_PIXELS: u64 = 64 * 1024 * 1024;

/// Control point distance for a quarter circle drawn as one cubic
const KAPPA: f32 = 0.552_284_8;

/// Paints staged pages in software
#[derive(Debug, Clone)]
pub struct SoftwareRasterizer {
    fonts: Arc<FontBook>,
}

impl Default for SoftwareRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftwareRasterizer {
    /// Rasterizer using the system fonts
    pub fn new() -> Self {
        Self::with_fonts(FontBook::system())
    }

    /// Rasterizer using the configured font file, if any, before system fonts
    pub fn from_settings(settings: &ExportSettings) -> Self {
        Self::with_fonts(FontBook::load(settings.font_file.as_deref()))
    }

    pub fn with_fonts(fonts: FontBook) -> Self {
        Self {
            fonts: Arc::new(fonts),
        }
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    /// Paint `page` synchronously
    pub fn paint(&self, page: &StagedPage, options: &CaptureOptions) -> Result<RasterImage> {
        let (width, height) = options.pixel_size();
        if u64::from(width) * u64::from(height) > MAX_PIXELS {
            return Err(ExportError::Raster(format!(
                "{}x{} exceeds the raster size limit",
                width, height
            )));
        }

        let mut painter = Painter {
            image: RgbaImage::from_pixel(width, height, opaque(options.background)),
            fonts: &self.fonts,
            glyphs: GlyphPainter::new(),
            sx: scale_for(f64::from(width), page.width, options.scale),
            sy: scale_for(f64::from(height), page.height, options.scale),
        };
        painter.fill_rect(&Rect::new(0.0, 0.0, page.width, page.height), 0.0, page.background);
        for item in &page.items {
            painter.item(item)?;
        }

        let rgb = DynamicImage::ImageRgba8(painter.image).into_rgb8();
        RasterImage::new(width, height, rgb.into_raw())
    }
}

impl RasterCapture for SoftwareRasterizer {
    fn capture(
        &self,
        page: &StagedPage,
        options: &CaptureOptions,
    ) -> impl Future<Output = Result<RasterImage>> + Send {
        let rasterizer = self.clone();
        let page = page.clone();
        let options = *options;
        async move {
            match tokio::task::spawn_blocking(move || rasterizer.paint(&page, &options)).await {
                Ok(painted) => painted,
                Err(e) => Err(ExportError::Capture(e.to_string())),
            }
        }
    }
}

fn scale_for(pixels: f64, points: f64, fallback: f64) -> f64 {
    if points > 0.0 {
        pixels / points
    } else {
        fallback
    }
}

fn rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}

/// The bitmap itself is always opaque
fn opaque(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

fn paint_of(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn rounded_rect(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Option<tiny_skia::Path> {
    let r = radius.min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        return Some(PathBuilder::from_rect(tiny_skia::Rect::from_xywh(x, y, w, h)?));
    }
    let c = r * KAPPA;
    let (right, bottom) = (x + w, y + h);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - r + c, y, right, y + r - c, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + c, right - r + c, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + r - c, bottom, x, bottom - r + c, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - c, x + r - c, y, x + r, y);
    pb.close();
    pb.finish()
}

/// Maps page coordinates to device pixels while painting
struct Painter<'a> {
    image: RgbaImage,
    fonts: &'a FontBook,
    glyphs: GlyphPainter,
    sx: f64,
    sy: f64,
}

impl Painter<'_> {
    fn item(&mut self, item: &RenderItem) -> Result<()> {
        let (sx, sy) = (self.sx, self.sy);
        match item {
            RenderItem::Text(run) => self.text(run)?,
            RenderItem::Rectangle {
                bounds,
                fill,
                corner_radius,
                ..
            } => self.fill_rect(bounds, *corner_radius, *fill),
            RenderItem::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                let mut pb = PathBuilder::new();
                pb.move_to((x1 * sx) as f32, (y1 * sy) as f32);
                pb.line_to((x2 * sx) as f32, (y2 * sy) as f32);
                if let Some(path) = pb.finish() {
                    let stroke = Stroke {
                        width: (width * sx.min(sy)) as f32,
                        ..Stroke::default()
                    };
                    let paint = paint_of(*color);
                    self.with_pixmap(|pixmap| {
                        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None)
                    });
                }
            }
            RenderItem::Circle { cx, cy, r, fill } => {
                let circle =
                    PathBuilder::from_circle((cx * sx) as f32, (cy * sy) as f32, (r * sx.min(sy)) as f32);
                if let Some(path) = circle {
                    let paint = paint_of(*fill);
                    self.with_pixmap(|pixmap| {
                        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None)
                    });
                }
            }
            RenderItem::ChartSlot {
                bounds,
                chart: Some(chart),
            } => self.chart(chart, bounds)?,
            RenderItem::ChartSlot { chart: None, .. } => {}
        }
        Ok(())
    }

    /// Run `draw` on a tiny-skia view of the image. Every pixel is opaque,
    /// so the straight RGBA buffer is also valid premultiplied data.
    fn with_pixmap(&mut self, draw: impl FnOnce(&mut PixmapMut<'_>)) {
        let (width, height) = self.image.dimensions();
        if let Some(mut pixmap) = PixmapMut::from_bytes(&mut self.image, width, height) {
            draw(&mut pixmap);
        }
    }

    fn fill_rect(&mut self, bounds: &Rect, corner_radius: f64, fill: Color) {
        let (sx, sy) = (self.sx, self.sy);
        let x0 = bounds.x * sx;
        let y0 = bounds.y * sy;
        let x1 = bounds.right() * sx;
        let y1 = bounds.bottom() * sy;
        let on_grid = [x0, y0, x1, y1].iter().all(|v| (v - v.round()).abs() < 1e-6);

        if corner_radius <= 0.0 && fill.a == 255 && on_grid {
            let (x0, y0) = (x0.round().max(0.0), y0.round().max(0.0));
            let (w, h) = ((x1.round() - x0).max(0.0), (y1.round() - y0).max(0.0));
            if w >= 1.0 && h >= 1.0 {
                let rect = imageproc::rect::Rect::at(x0 as i32, y0 as i32).of_size(w as u32, h as u32);
                draw_filled_rect_mut(&mut self.image, rect, rgba(fill));
            }
            return;
        }

        let path = rounded_rect(
            x0 as f32,
            y0 as f32,
            (x1 - x0) as f32,
            (y1 - y0) as f32,
            (corner_radius * sx.min(sy)) as f32,
        );
        if let Some(path) = path {
            let paint = paint_of(fill);
            self.with_pixmap(|pixmap| {
                pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None)
            });
        }
    }

    fn text(&mut self, run: &TextRun) -> Result<()> {
        if run.text.trim().is_empty() {
            return Ok(());
        }
        let face = self
            .fonts
            .face(run.bold, run.italic)
            .ok_or_else(|| ExportError::Raster("no font available to draw text".to_string()))?;
        let style = GlyphStyle {
            size: (run.font_size * self.sy) as f32,
            color: rgba(run.color),
            embolden: face.embolden,
            oblique: face.oblique,
        };
        let x = (run.x * self.sx) as f32;
        let top = (run.y * self.sy) as f32;

        let Painter {
            image,
            fonts,
            glyphs,
            ..
        } = self;
        fonts
            .with_face(face.id, |font| {
                let advance = glyphs.measure(font, &run.text, style.size);
                let left = match run.align {
                    TextAlign::Left => x,
                    TextAlign::Center => x - advance / 2.0,
                    TextAlign::Right => x - advance,
                };
                let baseline = top + GlyphPainter::ascent(font, style.size);
                glyphs.draw(image, font, &style, &run.text, left, baseline);
            })
            .ok_or_else(|| ExportError::Raster(format!("font face {:?} could not be read", face.id)))
    }

    /// Fit the chart into its slot, keeping its aspect ratio, centered horizontally
    fn chart(&mut self, chart: &RenderedChart, slot: &Rect) -> Result<()> {
        if chart.width <= 0.0 || chart.height <= 0.0 {
            return Ok(());
        }
        let tree = Tree::from_str(&chart.to_svg(), &self.fonts.svg_options())
            .map_err(|e| ExportError::Raster(format!("chart: {}", e)))?;

        let k = (slot.width / chart.width).min(slot.height / chart.height);
        let ox = slot.x + (slot.width - chart.width * k) / 2.0;
        let transform = Transform::from_row(
            (k * self.sx) as f32,
            0.0,
            0.0,
            (k * self.sy) as f32,
            (ox * self.sx) as f32,
            (slot.y * self.sy) as f32,
        );
        self.with_pixmap(|pixmap| resvg::render(&tree, transform, pixmap));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts::ChartRenderPrimitive;
    use charts::{TextAnchor, TextBaseline};
    use resvg::usvg::fontdb::Database;

    fn options(scale: f64) -> CaptureOptions {
        CaptureOptions {
            width: 100,
            height: 50,
            scale,
            background: Color::WHITE,
        }
    }

    fn page(items: Vec<RenderItem>) -> StagedPage {
        StagedPage {
            width: 100.0,
            height: 50.0,
            background: Color::WHITE,
            items,
        }
    }

    fn is_dark(image: &RasterImage, x: u32, y: u32) -> bool {
        image.pixel(x, y).is_some_and(|p| p.iter().all(|&c| c < 32))
    }

    fn ink(image: &RasterImage) -> usize {
        image.pixels.chunks(3).filter(|p| p.iter().any(|&c| c < 128)).count()
    }

    /// Horizontal extent of the dark pixels
    fn ink_span(image: &RasterImage) -> (u32, u32) {
        let columns: Vec<u32> = (0..image.width)
            .filter(|&x| (0..image.height).any(|y| image.pixel(x, y).is_some_and(|p| p[0] < 128)))
            .collect();
        (columns[0], columns[columns.len() - 1])
    }

    fn paint_text(rasterizer: &SoftwareRasterizer, run: TextRun) -> RasterImage {
        rasterizer
            .paint(&page(vec![RenderItem::Text(run)]), &options(2.0))
            .unwrap()
    }

    #[test]
    fn test_blank_page_is_background() {
        let image = SoftwareRasterizer::new()
            .paint(&page(Vec::new()), &options(2.0))
            .unwrap();
        assert_eq!((image.width, image.height), (200, 100));
        assert!(image.pixels.iter().all(|&b| b == 255));
    }

    #[test]
    fn test_items_scale_with_density() {
        let rect = RenderItem::fill_rect(Rect::new(10.0, 10.0, 10.0, 10.0), Color::BLACK);
        let image = SoftwareRasterizer::new().paint(&page(vec![rect]), &options(2.0)).unwrap();
        assert_eq!(image.pixel(20, 20), Some([0, 0, 0]));
        assert_eq!(image.pixel(39, 39), Some([0, 0, 0]));
        assert_eq!(image.pixel(41, 41), Some([255, 255, 255]));
    }

    #[test]
    fn test_translucent_rounded_rect_blends() {
        let rect = RenderItem::Rectangle {
            bounds: Rect::new(0.0, 0.0, 100.0, 50.0),
            fill: Color::rgba(0, 0, 0, 128),
            corner_radius: 8.0,
            chrome: false,
        };
        let image = SoftwareRasterizer::new().paint(&page(vec![rect]), &options(1.0)).unwrap();
        let [gray, ..] = image.pixel(50, 25).unwrap();
        assert!((120..=135).contains(&gray), "{}", gray);
        // Corners are cut
        assert_eq!(image.pixel(0, 0), Some([255, 255, 255]));
    }

    #[test]
    fn test_line_and_circle_are_painted() {
        let items = vec![
            RenderItem::Line {
                x1: 0.0,
                y1: 10.0,
                x2: 100.0,
                y2: 10.0,
                color: Color::BLACK,
                width: 2.0,
            },
            RenderItem::Circle {
                cx: 50.0,
                cy: 35.0,
                r: 5.0,
                fill: Color::BLACK,
            },
        ];
        let image = SoftwareRasterizer::new().paint(&page(items), &options(1.0)).unwrap();
        assert!(is_dark(&image, 50, 10));
        assert!(is_dark(&image, 50, 35));
        assert_eq!(image.pixel(50, 25), Some([255, 255, 255]));
    }

    #[test]
    fn test_text_is_painted() {
        let image = paint_text(
            &SoftwareRasterizer::new(),
            TextRun::new("Acme", 5.0, 5.0, 12.0, Color::BLACK),
        );
        assert!(ink(&image) > 0);
    }

    #[test]
    fn test_distinct_cyrillic_names_rasterize_differently() {
        let rasterizer = SoftwareRasterizer::new();
        let first = paint_text(&rasterizer, TextRun::new("Иван Попов", 5.0, 5.0, 12.0, Color::BLACK));
        let second = paint_text(&rasterizer, TextRun::new("Олег Жуков", 5.0, 5.0, 12.0, Color::BLACK));
        assert!(ink(&first) > 0);
        assert!(ink(&second) > 0);
        assert_ne!(first, second);
    }

    #[test]
    fn test_bold_run_carries_more_ink() {
        let rasterizer = SoftwareRasterizer::new();
        let regular = paint_text(&rasterizer, TextRun::new("Навыки", 5.0, 5.0, 12.0, Color::BLACK));
        let bold = paint_text(
            &rasterizer,
            TextRun::new("Навыки", 5.0, 5.0, 12.0, Color::BLACK).bold(),
        );
        assert!(ink(&bold) > ink(&regular));
    }

    #[test]
    fn test_centered_text_straddles_anchor() {
        let run = TextRun::new("Контакты", 50.0, 5.0, 10.0, Color::BLACK).aligned(TextAlign::Center);
        let image = paint_text(&SoftwareRasterizer::new(), run);
        let (left, right) = ink_span(&image);
        let middle = (left + right) / 2;
        assert!((94..=106).contains(&middle), "{}..{}", left, right);
    }

    #[test]
    fn test_text_without_fonts_fails() {
        let rasterizer = SoftwareRasterizer::with_fonts(FontBook::from_database(Database::new(), None));
        let run = RenderItem::Text(TextRun::new("Acme", 5.0, 5.0, 12.0, Color::BLACK));
        assert!(rasterizer.paint(&page(Vec::new()), &options(1.0)).is_ok());
        assert!(matches!(
            rasterizer.paint(&page(vec![run]), &options(1.0)),
            Err(ExportError::Raster(_))
        ));
    }

    #[test]
    fn test_chart_is_fitted_into_slot() {
        let chart = RenderedChart {
            width: 200.0,
            height: 100.0,
            primitives: vec![ChartRenderPrimitive::Rect {
                x: 0.0,
                y: 0.0,
                width: 200.0,
                height: 100.0,
                fill: Color::BLACK,
            }],
        };
        let slot = RenderItem::ChartSlot {
            bounds: Rect::new(0.0, 0.0, 100.0, 50.0),
            chart: Some(chart),
        };
        let image = SoftwareRasterizer::new().paint(&page(vec![slot]), &options(1.0)).unwrap();
        assert!(is_dark(&image, 1, 1));
        assert!(is_dark(&image, 98, 48));
    }

    #[test]
    fn test_chart_labels_are_drawn() {
        let label = |text: &str| RenderedChart {
            width: 100.0,
            height: 50.0,
            primitives: vec![ChartRenderPrimitive::Text {
                x: 50.0,
                y: 25.0,
                text: text.to_string(),
                font_size: 14.0,
                fill: Color::BLACK,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
            }],
        };
        let rasterizer = SoftwareRasterizer::new();
        let paint = |text: &str| {
            let slot = RenderItem::ChartSlot {
                bounds: Rect::new(0.0, 0.0, 100.0, 50.0),
                chart: Some(label(text)),
            };
            rasterizer.paint(&page(vec![slot]), &options(2.0)).unwrap()
        };
        let react = paint("Реакт");
        assert!(ink(&react) > 0);
        assert_ne!(react, paint("Гит"));
    }

    #[test]
    fn test_empty_slot_paints_nothing() {
        let slot = RenderItem::ChartSlot {
            bounds: Rect::new(0.0, 0.0, 100.0, 50.0),
            chart: None,
        };
        let image = SoftwareRasterizer::new().paint(&page(vec![slot]), &options(1.0)).unwrap();
        assert!(image.pixels.iter().all(|&b| b == 255));
    }

    #[test]
    fn test_rejects_oversized_raster() {
        let result = SoftwareRasterizer::new().paint(&page(Vec::new()), &options(1000.0));
        assert!(matches!(result, Err(ExportError::Raster(_))));
    }

    #[tokio::test]
    async fn test_capture_runs_off_the_runtime() {
        let image = SoftwareRasterizer::new()
            .capture(&page(Vec::new()), &options(1.0))
            .await
            .unwrap();
        assert_eq!(image.width, 100);
    }
}
