//! Centered header, accent-ruled section headings, skills as a two-column
//! grid of bars.

use super::{sizes, Column, TemplateContext, TextStyle, PAGE_PADDING};
use crate::format::format_date_range;
use crate::locale::Heading;
use crate::render_item::{RenderItem, TextAlign};
use crate::style::palette;
use charts::Color;
use resume_model::TimelineEntry;

const GRID_GAP: f64 = 16.0;

pub(super) fn build(ctx: &TemplateContext<'_>, items: &mut Vec<RenderItem>) {
    let accent = ctx.scheme.accent();
    let profile = &ctx.data.profile;
    let mut page = Column::new(items, PAGE_PADDING, ctx.width - PAGE_PADDING * 2.0, PAGE_PADDING);

    page.line(
        &profile.full_name,
        TextStyle::new(sizes::TITLE, palette::TEXT).bold(),
        TextAlign::Center,
    );
    page.line(
        &profile.position,
        TextStyle::new(sizes::SUBTITLE, accent),
        TextAlign::Center,
    );
    page.space(6.0);
    let contacts: Vec<&str> = [&profile.email, &profile.phone, &profile.location]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    page.line(
        &contacts.join("    "),
        TextStyle::new(sizes::SMALL, palette::MUTED),
        TextAlign::Center,
    );
    page.space(20.0);

    let body = TextStyle::new(sizes::BODY, palette::BODY);

    heading(&mut page, ctx.locale.heading(Heading::About), accent);
    page.paragraph(&profile.about, body);
    page.space(14.0);

    heading(&mut page, ctx.locale.heading(Heading::Experience), accent);
    timeline(&mut page, ctx, ctx.data.experience.iter());
    page.space(2.0);

    heading(&mut page, ctx.locale.heading(Heading::Education), accent);
    timeline(&mut page, ctx, ctx.data.education.iter());
    page.space(2.0);

    heading(&mut page, ctx.locale.heading(Heading::Skills), accent);
    let (left, top, width) = (page.x, page.y, page.width);
    let cell_width = (width - GRID_GAP) / 2.0;
    let label = TextStyle::new(sizes::BODY, palette::TEXT);
    let percent = TextStyle::new(sizes::SMALL, palette::SUBTLE);
    let mut row_top = top;
    for row in ctx.data.skills.chunks(2) {
        let mut row_bottom = row_top;
        for (i, skill) in row.iter().enumerate() {
            let x = left + i as f64 * (cell_width + GRID_GAP);
            let mut cell = Column::new(items, x, cell_width, row_top);
            cell.skill_bar(&skill.name, skill.clamped_level(), label, percent, accent, palette::TRACK);
            row_bottom = row_bottom.max(cell.y);
        }
        row_top = row_bottom + GRID_GAP;
    }
}

fn heading(column: &mut Column<'_>, text: &str, accent: Color) {
    column.line(text, TextStyle::new(sizes::HEADING, accent).bold(), TextAlign::Left);
    column.space(2.0);
    column.rule(accent, 2.0);
    column.space(10.0);
}

fn timeline<'e, E: TimelineEntry + 'e>(
    column: &mut Column<'_>,
    ctx: &TemplateContext<'_>,
    entries: impl Iterator<Item = &'e E>,
) {
    let small = TextStyle::new(sizes::SMALL, palette::MUTED);
    for entry in entries {
        let dates = format_date_range(entry.start_date(), entry.end_date(), ctx.locale);
        column.split_row(
            entry.title(),
            TextStyle::new(sizes::BODY, palette::TEXT).bold(),
            &dates,
            small,
        );
        column.line(entry.organization(), small.italic(), TextAlign::Left);
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

    fn build_sample(scheme: ColorScheme) -> (Vec<RenderItem>, f64) {
        let data = sample_resume();
        let ctx = TemplateContext::new(&data, scheme, DisplayLocale::En);
        let mut items = Vec::new();
        build(&ctx, &mut items);
        (items, ctx.width)
    }

    #[test]
    fn test_header_is_centered() {
        let (items, width) = build_sample(ColorScheme::Blue);
        let name = items[0].as_text().unwrap();
        assert_eq!(name.align, TextAlign::Center);
        assert_eq!(name.x, width / 2.0);
    }

    #[test]
    fn test_headings_are_ruled_in_accent() {
        let (items, _) = build_sample(ColorScheme::Green);
        let rules: Vec<_> = items
            .iter()
            .filter_map(|item| match item {
                RenderItem::Line { color, width, .. } => Some((*color, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(rules.len(), 4);
        assert!(rules
            .iter()
            .all(|(color, width)| *color == ColorScheme::Green.accent() && *width == 2.0));
    }

    #[test]
    fn test_company_is_italic() {
        let (items, _) = build_sample(ColorScheme::Blue);
        let company = items
            .iter()
            .filter_map(RenderItem::as_text)
            .find(|run| run.text == "ООО \"Софт\"")
            .unwrap();
        assert!(company.italic);
    }

    #[test]
    fn test_skills_grid_has_two_columns() {
        let (items, width) = build_sample(ColorScheme::Blue);
        let xs: Vec<f64> = ["React", "JavaScript", "TypeScript"]
            .iter()
            .map(|name| {
                items
                    .iter()
                    .filter_map(RenderItem::as_text)
                    .find(|run| run.text == *name)
                    .unwrap()
                    .x
            })
            .collect();
        assert_eq!(xs[0], xs[2]);
        assert!(xs[1] > width / 2.0);
    }
}
