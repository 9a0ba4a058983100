//! Plain single column: contact line, uppercase headings, timeline rules
//! with accent markers, and a chart slot for skills.

use super::{sizes, Column, TemplateContext, TextStyle, CHART_HEIGHT, PAGE_PADDING};
use crate::format::format_date_range;
use crate::locale::Heading;
use crate::render_item::{Rect, RenderItem, TextAlign};
use crate::style::palette;
use charts::Color;
use resume_model::TimelineEntry;

/// Horizontal offset of the timeline rule from the column edge
const RULE_INSET: f64 = 8.0;
/// Gap between the rule and the entry text
const ENTRY_INDENT: f64 = 16.0;
const MARKER_RADIUS: f64 = 6.0;

pub(super) fn build(ctx: &TemplateContext<'_>, items: &mut Vec<RenderItem>) {
    let accent = ctx.scheme.accent();
    let profile = &ctx.data.profile;
    let mut page = Column::new(items, PAGE_PADDING, ctx.width - PAGE_PADDING * 2.0, PAGE_PADDING);

    page.line(
        &profile.full_name,
        TextStyle::new(sizes::TITLE, palette::TEXT).bold(),
        TextAlign::Left,
    );
    page.line(&profile.position, TextStyle::new(sizes::SUBTITLE, accent), TextAlign::Left);
    page.space(6.0);
    page.paragraph(
        &contact_line(&[
            profile.email.as_str(),
            profile.phone.as_str(),
            profile.location.as_str(),
        ]),
        TextStyle::new(sizes::SMALL, palette::MUTED),
    );
    page.space(20.0);

    page.paragraph(&profile.about, TextStyle::new(sizes::BODY, palette::BODY));
    page.space(20.0);

    heading(&mut page, ctx.locale.heading(Heading::Experience), accent);
    timeline(&mut page, ctx, accent, ctx.data.experience.iter());
    page.space(8.0);

    heading(&mut page, ctx.locale.heading(Heading::Education), accent);
    timeline(&mut page, ctx, accent, ctx.data.education.iter());
    page.space(8.0);

    heading(&mut page, ctx.locale.heading(Heading::Skills), accent);
    let bounds = Rect::new(page.x, page.y, page.width, CHART_HEIGHT);
    page.push(RenderItem::ChartSlot { bounds, chart: None });
    page.space(CHART_HEIGHT);
}

/// Join the non-blank contact values with `" | "`
pub(crate) fn contact_line(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn heading(column: &mut Column<'_>, text: &str, accent: Color) {
    column.line(
        &text.to_uppercase(),
        TextStyle::new(sizes::BODY + 1.0, accent).bold(),
        TextAlign::Left,
    );
    column.space(10.0);
}

fn timeline<'e, E: TimelineEntry + 'e>(
    column: &mut Column<'_>,
    ctx: &TemplateContext<'_>,
    accent: Color,
    entries: impl Iterator<Item = &'e E>,
) {
    let rule_x = column.x + RULE_INSET;
    let (outer_x, outer_width) = (column.x, column.width);

    for entry in entries {
        let top = column.y;
        column.x = rule_x + ENTRY_INDENT;
        column.width = outer_width - RULE_INSET - ENTRY_INDENT;

        column.line(entry.title(), TextStyle::new(sizes::BODY, palette::TEXT).bold(), TextAlign::Left);
        column.line(entry.organization(), TextStyle::new(sizes::BODY, palette::MUTED), TextAlign::Left);
        let dates = format_date_range(entry.start_date(), entry.end_date(), ctx.locale);
        column.line(&dates, TextStyle::new(sizes::SMALL, palette::SUBTLE), TextAlign::Left);
        column.space(4.0);
        column.paragraph(entry.description(), TextStyle::new(sizes::BODY, palette::BODY));

        column.push(RenderItem::Line {
            x1: rule_x,
            y1: top,
            x2: rule_x,
            y2: column.y,
            color: palette::RULE,
            width: 2.0,
        });
        column.push(RenderItem::Circle {
            cx: rule_x,
            cy: top + MARKER_RADIUS,
            r: MARKER_RADIUS,
            fill: accent,
        });
        column.space(18.0);
    }

    column.x = outer_x;
    column.width = outer_width;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ColorScheme;
    use crate::DisplayLocale;
    use resume_model::sample_resume;

    #[test]
    fn test_contact_line() {
        assert_eq!(contact_line(&["a@b.c", "123", "Oslo"]), "a@b.c | 123 | Oslo");
        assert_eq!(contact_line(&["a@b.c", " ", "Oslo"]), "a@b.c | Oslo");
        assert_eq!(contact_line(&["", "", ""]), "");
    }

    #[test]
    fn test_markers_per_timeline_entry() {
        let data = sample_resume();
        let ctx = TemplateContext::new(&data, ColorScheme::Green, DisplayLocale::En);
        let mut items = Vec::new();
        build(&ctx, &mut items);

        let markers: Vec<_> = items
            .iter()
            .filter_map(|item| match item {
                RenderItem::Circle { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(markers.len(), data.experience.len() + data.education.len());
        assert!(markers.iter().all(|fill| *fill == ColorScheme::Green.accent()));
    }

    #[test]
    fn test_uppercase_headings_and_chart_slot() {
        let data = sample_resume();
        let ctx = TemplateContext::new(&data, ColorScheme::Blue, DisplayLocale::En);
        let mut items = Vec::new();
        build(&ctx, &mut items);

        assert!(items
            .iter()
            .filter_map(RenderItem::as_text)
            .any(|run| run.text == "EXPERIENCE"));
        let slot = items.iter().find_map(|item| match item {
            RenderItem::ChartSlot { bounds, chart } => Some((*bounds, chart.is_none())),
            _ => None,
        });
        let (bounds, empty) = slot.unwrap();
        assert!(empty);
        assert_eq!(bounds.height, CHART_HEIGHT);
        assert_eq!(bounds.width, ctx.width - PAGE_PADDING * 2.0);
    }
}
