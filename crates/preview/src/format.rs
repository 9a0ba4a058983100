//! Period formatting
//!
//! Periods are stored as free-form `YYYY-MM` strings. Anything that parses
//! is shown as a short month + year; an empty end means the entry is ongoing.

use crate::locale::DisplayLocale;
use chrono::{Datelike, NaiveDate};

/// Parse a `YYYY-MM` (or full `YYYY-MM-DD`) period
pub fn parse_period(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d"))
        .ok()
}

/// Format one period. Empty input stays empty; unparseable input is shown as typed.
pub fn format_period(value: &str, locale: DisplayLocale) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_period(trimmed) {
        Some(date) => locale.month_year(date.month(), date.year()),
        None => trimmed.to_string(),
    }
}

/// Format a start/end pair as `"{start} - {end}"`.
///
/// An empty end renders as the locale's "present" label. An entry with
/// neither date renders as an empty label.
pub fn format_date_range(start: &str, end: &str, locale: DisplayLocale) -> String {
    if start.trim().is_empty() && end.trim().is_empty() {
        return String::new();
    }

    let start = format_period(start, locale);
    let end = if end.trim().is_empty() {
        locale.present().to_string()
    } else {
        format_period(end, locale)
    };

    if start.is_empty() {
        format!("- {}", end)
    } else {
        format!("{} - {}", start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2020-01", DisplayLocale::En), "Jan 2020");
        assert_eq!(format_period(" 2018-12 ", DisplayLocale::En), "Dec 2018");
        assert_eq!(format_period("2020-03-15", DisplayLocale::En), "Mar 2020");
        assert_eq!(format_period("", DisplayLocale::En), "");
        assert_eq!(format_period("soon", DisplayLocale::En), "soon");
        assert_eq!(format_period("2020-13", DisplayLocale::En), "2020-13");
    }

    #[test]
    fn test_ongoing_range_ends_in_present() {
        let label = format_date_range("2020-01", "", DisplayLocale::En);
        assert_eq!(label, "Jan 2020 - Present");
        let label = format_date_range("2020-01", "", DisplayLocale::Ru);
        assert!(label.ends_with("По настоящее время"));
    }

    #[test]
    fn test_blank_range_is_empty() {
        assert_eq!(format_date_range("", "", DisplayLocale::En), "");
        assert_eq!(format_date_range("  ", "", DisplayLocale::Ru), "");
    }

    #[test]
    fn test_missing_start_has_no_placeholder() {
        assert_eq!(format_date_range("", "2019-12", DisplayLocale::En), "- Dec 2019");
    }

    #[test]
    fn test_closed_range() {
        assert_eq!(
            format_date_range("2018-03", "2019-12", DisplayLocale::En),
            "Mar 2018 - Dec 2019"
        );
    }

    proptest! {
        #[test]
        fn valid_months_always_format(year in 1900i32..2100, month in 1u32..=12) {
            let label = format_period(&format!("{:04}-{:02}", year, month), DisplayLocale::En);
            prop_assert!(label.ends_with(&year.to_string()));
            prop_assert!(!label.contains('-'));
        }
    }
}
