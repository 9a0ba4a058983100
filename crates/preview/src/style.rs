//! Template and color scheme selectors

use charts::Color;
use serde::{Deserialize, Serialize};

/// Visual layout applied to the resume data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Accent header band over a sidebar and a main column
    #[default]
    Modern,
    /// Single centered column with ruled section headings
    Classic,
    /// Single column with timeline markers and a skill radar chart
    Minimal,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Modern, Template::Classic, Template::Minimal];

    pub fn key(self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Minimal => "minimal",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Whether this template draws skills as a chart instead of bars
    pub fn uses_skill_chart(self) -> bool {
        matches!(self, Template::Minimal)
    }
}

/// Accent color token applied across a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Blue,
    Green,
    Red,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [ColorScheme::Blue, ColorScheme::Green, ColorScheme::Red];

    pub fn key(self) -> &'static str {
        match self {
            ColorScheme::Blue => "blue",
            ColorScheme::Green => "green",
            ColorScheme::Red => "red",
        }
    }

    /// Parse a scheme key; unknown keys fall back to blue
    pub fn parse(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }

    /// Accent for header bands, headings, rules, bars, and markers
    pub fn accent(self) -> Color {
        match self {
            ColorScheme::Blue => Color::rgb(0x25, 0x63, 0xEB),
            ColorScheme::Green => Color::rgb(0x16, 0xA3, 0x4A),
            ColorScheme::Red => Color::rgb(0xDC, 0x26, 0x26),
        }
    }

    /// Outline of the skill chart series
    pub fn chart_line(self) -> Color {
        match self {
            ColorScheme::Blue => Color::rgb(0x40, 0x9E, 0xFF),
            ColorScheme::Green => Color::rgb(0x67, 0xC2, 0x3A),
            ColorScheme::Red => Color::rgb(0xF5, 0x6C, 0x6C),
        }
    }

    /// Translucent fill of the skill chart series
    pub fn chart_area(self) -> Color {
        self.chart_line().with_alpha(0.6)
    }
}

/// Neutral colors shared by every template
pub mod palette {
    use charts::Color;

    pub const TEXT: Color = Color::rgb(0x11, 0x18, 0x27);
    pub const BODY: Color = Color::rgb(0x37, 0x41, 0x51);
    pub const MUTED: Color = Color::rgb(0x4B, 0x55, 0x63);
    pub const SUBTLE: Color = Color::rgb(0x6B, 0x72, 0x80);
    pub const TRACK: Color = Color::rgb(0xE5, 0xE7, 0xEB);
    pub const TRACK_DARK: Color = Color::rgb(0xD1, 0xD5, 0xDB);
    pub const SIDEBAR: Color = Color::rgb(0xF3, 0xF4, 0xF6);
    pub const RULE: Color = Color::rgb(0xE5, 0xE7, 0xEB);
    pub const SHADOW: Color = Color::rgba(0, 0, 0, 40);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_keys() {
        for template in Template::ALL {
            assert_eq!(Template::parse(template.key()), Some(template));
        }
        assert_eq!(Template::parse("fancy"), None);
        assert!(Template::Minimal.uses_skill_chart());
        assert!(!Template::Classic.uses_skill_chart());
    }

    #[test]
    fn test_unknown_scheme_falls_back_to_blue() {
        assert_eq!(ColorScheme::parse("green"), ColorScheme::Green);
        assert_eq!(ColorScheme::parse("indigo"), ColorScheme::Blue);
        assert_eq!(ColorScheme::parse(""), ColorScheme::Blue);
    }

    #[test]
    fn test_chart_colors() {
        assert_eq!(ColorScheme::Green.chart_line().to_hex(), "67C23A");
        assert_eq!(ColorScheme::Red.chart_area(), Color::rgba(0xF5, 0x6C, 0x6C, 153));
    }
}
