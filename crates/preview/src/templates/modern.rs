//! Accent header band, sidebar with contacts and skill bars, main column
//! with about, experience, and education.

use super::{sizes, Column, TemplateContext, TextStyle};
use crate::format::format_date_range;
use crate::locale::Heading;
use crate::render_item::{Rect, RenderItem, TextAlign};
use crate::style::palette;
use charts::Color;
use resume_model::TimelineEntry;

const BAND_PADDING: f64 = 28.0;
const COLUMN_PADDING: f64 = 20.0;

pub(super) fn build(ctx: &TemplateContext<'_>, items: &mut Vec<RenderItem>) {
    let accent = ctx.scheme.accent();
    let profile = &ctx.data.profile;

    // Header band
    let title = TextStyle::new(sizes::TITLE, Color::WHITE).bold();
    let subtitle = TextStyle::new(sizes::SUBTITLE, Color::WHITE);
    let band_height = BAND_PADDING * 2.0 + title.line_height() + subtitle.line_height();
    items.push(RenderItem::fill_rect(
        Rect::new(0.0, 0.0, ctx.width, band_height),
        accent,
    ));
    let mut band = Column::new(items, BAND_PADDING, ctx.width - BAND_PADDING * 2.0, BAND_PADDING);
    band.line(&profile.full_name, title, TextAlign::Left);
    band.line(&profile.position, subtitle, TextAlign::Left);

    // Sidebar
    let sidebar_width = ctx.width / 3.0;
    items.push(RenderItem::fill_rect(
        Rect::new(0.0, band_height, sidebar_width, (ctx.height - band_height).max(0.0)),
        palette::SIDEBAR,
    ));
    let mut side = Column::new(
        items,
        COLUMN_PADDING,
        sidebar_width - COLUMN_PADDING * 2.0,
        band_height + COLUMN_PADDING,
    );
    heading(&mut side, ctx.locale.heading(Heading::Contacts), accent);
    let body = TextStyle::new(sizes::BODY, palette::TEXT);
    for value in [&profile.email, &profile.phone, &profile.location] {
        let dot_y = side.y + body.line_height() / 2.0;
        side.push(RenderItem::Circle {
            cx: side.x + 2.5,
            cy: dot_y,
            r: 2.5,
            fill: palette::MUTED,
        });
        side.x += 10.0;
        side.width -= 10.0;
        side.paragraph(value, body);
        side.x -= 10.0;
        side.width += 10.0;
        side.space(4.0);
    }
    side.space(16.0);

    heading(&mut side, ctx.locale.heading(Heading::Skills), accent);
    let percent = TextStyle::new(sizes::SMALL, palette::SUBTLE);
    for skill in ctx.data.skills.iter() {
        side.skill_bar(&skill.name, skill.clamped_level(), body, percent, accent, palette::TRACK_DARK);
        side.space(8.0);
    }

    // Main column
    let mut main = Column::new(
        items,
        sidebar_width + COLUMN_PADDING,
        ctx.width - sidebar_width - COLUMN_PADDING * 2.0,
        band_height + COLUMN_PADDING,
    );
    heading(&mut main, ctx.locale.heading(Heading::About), accent);
    main.paragraph(&profile.about, body.colored(palette::BODY));
    main.space(16.0);

    heading(&mut main, ctx.locale.heading(Heading::Experience), accent);
    timeline(&mut main, ctx, ctx.data.experience.iter());
    main.space(8.0);

    heading(&mut main, ctx.locale.heading(Heading::Education), accent);
    timeline(&mut main, ctx, ctx.data.education.iter());
}

fn heading(column: &mut Column<'_>, text: &str, accent: Color) {
    column.line(text, TextStyle::new(sizes::HEADING, palette::TEXT).bold(), TextAlign::Left);
    column.space(4.0);
    column.rule(accent, 1.0);
    column.space(10.0);
}

fn timeline<'e, E: TimelineEntry + 'e>(
    column: &mut Column<'_>,
    ctx: &TemplateContext<'_>,
    entries: impl Iterator<Item = &'e E>,
) {
    let small = TextStyle::new(sizes::SMALL, palette::MUTED);
    for entry in entries {
        column.line(entry.title(), TextStyle::new(sizes::BODY, palette::TEXT).bold(), TextAlign::Left);
        let dates = format_date_range(entry.start_date(), entry.end_date(), ctx.locale);
        column.split_row(entry.organization(), small, &dates, small);
        column.space(2.0);
        column.paragraph(entry.description(), TextStyle::new(sizes::BODY, palette::BODY));
        column.space(12.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ColorScheme;
    use crate::DisplayLocale;
    use resume_model::sample_resume;

    #[test]
    fn test_header_band_uses_accent() {
        let data = sample_resume();
        let ctx = TemplateContext::new(&data, ColorScheme::Red, DisplayLocale::En);
        let mut items = Vec::new();
        build(&ctx, &mut items);

        match &items[0] {
            RenderItem::Rectangle { bounds, fill, .. } => {
                assert_eq!(*fill, ColorScheme::Red.accent());
                assert_eq!(bounds.width, ctx.width);
            }
            other => panic!("expected header band, got {:?}", other),
        }
        let name = items[1].as_text().unwrap();
        assert_eq!(name.text, data.profile.full_name);
        assert_eq!(name.color, Color::WHITE);
    }

    #[test]
    fn test_experience_sits_right_of_sidebar() {
        let data = sample_resume();
        let ctx = TemplateContext::new(&data, ColorScheme::Blue, DisplayLocale::En);
        let mut items = Vec::new();
        build(&ctx, &mut items);

        let company = items
            .iter()
            .filter_map(RenderItem::as_text)
            .find(|run| run.text == "ООО \"Техно\"")
            .unwrap();
        assert!(company.x > ctx.width / 3.0);

        let skill = items
            .iter()
            .filter_map(RenderItem::as_text)
            .find(|run| run.text == "React")
            .unwrap();
        assert!(skill.x < ctx.width / 3.0);
    }
}
