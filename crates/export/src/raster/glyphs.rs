//! Shaped text drawing with swash

use image::{Pixel, Rgba, RgbaImage};
use swash::scale::{Render, ScaleContext, Source};
use swash::shape::ShapeContext;
use swash::zeno::{Angle, Format, Transform, Vector};
use swash::FontRef;

/// Shear applied when an italic run has no italic face
const OBLIQUE_DEGREES: f32 = 12.0;

/// How a run is drawn, in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub size: f32,
    pub color: Rgba<u8>,
    pub embolden: bool,
    pub oblique: bool,
}

/// Reusable shaping and scaling state
pub struct GlyphPainter {
    shape: ShapeContext,
    scale: ScaleContext,
}

impl Default for GlyphPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphPainter {
    pub fn new() -> Self {
        Self {
            shape: ShapeContext::new(),
            scale: ScaleContext::new(),
        }
    }

    /// Total advance of `text` at `size` pixels
    pub fn measure(&mut self, font: FontRef<'_>, text: &str, size: f32) -> f32 {
        let mut shaper = self.shape.builder(font).size(size).build();
        shaper.add_str(text);

        let mut width = 0.0;
        shaper.shape_with(|cluster| {
            width += cluster.glyphs.iter().map(|glyph| glyph.advance).sum::<f32>();
        });
        width
    }

    /// Distance from the top of the line box to the baseline
    pub fn ascent(font: FontRef<'_>, size: f32) -> f32 {
        font.metrics(&[]).scale(size).ascent
    }

    /// Draw `text` with its pen starting at `x` on `baseline`
    pub fn draw(
        &mut self,
        image: &mut RgbaImage,
        font: FontRef<'_>,
        style: &GlyphStyle,
        text: &str,
        x: f32,
        baseline: f32,
    ) {
        let mut shaper = self.shape.builder(font).size(style.size).build();
        shaper.add_str(text);
        let mut scaler = self.scale.builder(font).size(style.size).hint(false).build();

        let shear = style
            .oblique
            .then(|| Transform::skew(Angle::from_degrees(OBLIQUE_DEGREES), Angle::from_degrees(0.0)));
        let strength = if style.embolden { style.size / 24.0 } else { 0.0 };

        let mut pen_x = x;
        shaper.shape_with(|cluster| {
            for glyph in cluster.glyphs {
                let rendered = Render::new(&[Source::Outline])
                    .format(Format::Alpha)
                    .embolden(strength)
                    .transform(shear)
                    .offset(Vector::new(glyph.x, glyph.y))
                    .render(&mut scaler, glyph.id);

                if let Some(mask) = rendered {
                    let left = (pen_x + mask.placement.left as f32).round() as i32;
                    let top = (baseline - mask.placement.top as f32).round() as i32;
                    let width = mask.placement.width as usize;
                    for (i, &coverage) in mask.data.iter().enumerate() {
                        if coverage > 0 {
                            let (px, py) = ((i % width) as i32, (i / width) as i32);
                            blend(image, left + px, top + py, coverage, style.color);
                        }
                    }
                }

                pen_x += glyph.advance;
            }
        });
    }
}

fn blend(image: &mut RgbaImage, x: i32, y: i32, coverage: u8, color: Rgba<u8>) {
    if x < 0 || y < 0 || x as u32 >= image.width() || y as u32 >= image.height() {
        return;
    }
    let alpha = (u16::from(coverage) * u16::from(color[3]) / 255) as u8;
    image
        .get_pixel_mut(x as u32, y as u32)
        .blend(&Rgba([color[0], color[1], color[2], alpha]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::fonts::FontBook;

    fn style() -> GlyphStyle {
        GlyphStyle {
            size: 24.0,
            color: Rgba([0, 0, 0, 255]),
            embolden: false,
            oblique: false,
        }
    }

    fn draw(book: &FontBook, text: &str, style: GlyphStyle) -> RgbaImage {
        let face = book.face(false, false).unwrap();
        let mut image = RgbaImage::from_pixel(200, 40, Rgba([255, 255, 255, 255]));
        let mut painter = GlyphPainter::new();
        book.with_face(face.id, |font| {
            let baseline = GlyphPainter::ascent(font, style.size);
            painter.draw(&mut image, font, &style, text, 2.0, baseline);
        })
        .unwrap();
        image
    }

    #[test]
    fn test_measure_grows_with_text() {
        let book = FontBook::system();
        let face = book.face(false, false).unwrap();
        let mut painter = GlyphPainter::new();
        let (short, long) = book
            .with_face(face.id, |font| {
                (painter.measure(font, "Ив", 12.0), painter.measure(font, "Иван", 12.0))
            })
            .unwrap();
        assert!(short > 0.0);
        assert!(long > short);
    }

    #[test]
    fn test_distinct_cyrillic_letters_differ() {
        let book = FontBook::system();
        assert_ne!(draw(&book, "Ж", style()), draw(&book, "Ы", style()));
    }

    #[test]
    fn test_synthetic_styles_change_the_ink() {
        let book = FontBook::system();
        let plain = draw(&book, "Навыки", style());
        let bold = draw(&book, "Навыки", GlyphStyle { embolden: true, ..style() });
        let slanted = draw(&book, "Навыки", GlyphStyle { oblique: true, ..style() });
        assert_ne!(plain, bold);
        assert_ne!(plain, slanted);
    }

    #[test]
    fn test_blend_respects_bounds_and_alpha() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        blend(&mut image, -1, 0, 255, Rgba([0, 0, 0, 255]));
        blend(&mut image, 5, 5, 255, Rgba([0, 0, 0, 255]));
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));

        blend(&mut image, 1, 1, 255, Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(1, 1).0, [0, 0, 0, 255]);
        blend(&mut image, 0, 0, 128, Rgba([0, 0, 0, 255]));
        let gray = image.get_pixel(0, 0).0[0];
        assert!((120..=135).contains(&gray), "{}", gray);
    }
}
