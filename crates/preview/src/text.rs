//! Text measurement and wrapping
//!
//! Widths are estimated from the character count; break positions follow
//! UAX #14 via `unicode-linebreak`.

use unicode_linebreak::{linebreaks, BreakOpportunity};

/// Average advance of one character relative to the font size
const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Estimated width of a single line of text
pub fn measure_text(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_FACTOR
}

/// Break `text` into lines no wider than `max_width`.
///
/// A word longer than the line is kept whole on its own line. Mandatory
/// breaks (newlines) always start a new line. Empty input yields no lines.
pub fn wrap_text(text: &str, font_size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    if text.trim().is_empty() {
        return lines;
    }

    let mut current = String::new();
    let mut start = 0;

    for (offset, opportunity) in linebreaks(text) {
        let segment = &text[start..offset];
        start = offset;

        let candidate = format!("{}{}", current, segment);
        if !current.is_empty() && measure_text(candidate.trim_end(), font_size) > max_width {
            lines.push(current.trim_end().to_string());
            current = segment.to_string();
        } else {
            current = candidate;
        }

        if opportunity == BreakOpportunity::Mandatory {
            let line = current.trim_end_matches(['\n', '\r']).trim_end().to_string();
            lines.push(line);
            current.clear();
        }
    }

    if !current.trim().is_empty() {
        lines.push(current.trim_end().to_string());
    }

    // linebreaks() reports a mandatory break at end of text, which can leave a trailing blank
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap_text("Hello world", 10.0, 500.0), vec!["Hello world"]);
    }

    #[test]
    fn test_wraps_at_spaces() {
        // 6px per char, 60px fits 10 chars
        let lines = wrap_text("alpha beta gamma delta", 10.0, 60.0);
        assert_eq!(lines, vec!["alpha beta", "gamma", "delta"]);
    }

    #[test]
    fn test_long_word_kept_whole() {
        let lines = wrap_text("a supercalifragilistic b", 10.0, 30.0);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_newline_forces_break() {
        let lines = wrap_text("first\nsecond", 10.0, 500.0);
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(wrap_text("", 10.0, 100.0).is_empty());
        assert!(wrap_text("   ", 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_measure_counts_chars_not_bytes() {
        assert_eq!(measure_text("Опыт", 10.0), measure_text("abcd", 10.0));
    }

    proptest! {
        #[test]
        fn wrapping_preserves_words(words in proptest::collection::vec("[a-z]{1,8}", 1..20)) {
            let text = words.join(" ");
            let lines = wrap_text(&text, 10.0, 120.0);
            let rejoined: Vec<String> = lines
                .iter()
                .flat_map(|l| l.split(' ').map(str::to_string))
                .collect();
            prop_assert_eq!(rejoined, words);
        }
    }
}
