//! Display locale for labels rendered into the page

use serde::{Deserialize, Serialize};

/// Language of fixed labels (section headings, month names, "present")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLocale {
    En,
    #[default]
    Ru,
}

/// Fixed headings drawn by the templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    About,
    Experience,
    Education,
    Skills,
    Contacts,
}

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const RU_MONTHS: [&str; 12] = [
    "янв.", "февр.", "март", "апр.", "май", "июнь", "июль", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

impl DisplayLocale {
    pub fn key(self) -> &'static str {
        match self {
            DisplayLocale::En => "en",
            DisplayLocale::Ru => "ru",
        }
    }

    /// Parse a language tag such as `en`, `ru`, or `ru-RU`
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(DisplayLocale::En),
            "ru" => Some(DisplayLocale::Ru),
            _ => None,
        }
    }

    /// Label for an ongoing period
    pub fn present(self) -> &'static str {
        match self {
            DisplayLocale::En => "Present",
            DisplayLocale::Ru => "По настоящее время",
        }
    }

    /// Short month name; `month` is 1-based
    pub fn short_month(self, month: u32) -> &'static str {
        let index = month.clamp(1, 12) as usize - 1;
        match self {
            DisplayLocale::En => EN_MONTHS[index],
            DisplayLocale::Ru => RU_MONTHS[index],
        }
    }

    /// "Jan 2020" / "янв. 2020 г."
    pub fn month_year(self, month: u32, year: i32) -> String {
        match self {
            DisplayLocale::En => format!("{} {}", self.short_month(month), year),
            DisplayLocale::Ru => format!("{} {} г.", self.short_month(month), year),
        }
    }

    pub fn heading(self, heading: Heading) -> &'static str {
        match (self, heading) {
            (DisplayLocale::En, Heading::About) => "About",
            (DisplayLocale::En, Heading::Experience) => "Experience",
            (DisplayLocale::En, Heading::Education) => "Education",
            (DisplayLocale::En, Heading::Skills) => "Skills",
            (DisplayLocale::En, Heading::Contacts) => "Contacts",
            (DisplayLocale::Ru, Heading::About) => "О себе",
            (DisplayLocale::Ru, Heading::Experience) => "Опыт работы",
            (DisplayLocale::Ru, Heading::Education) => "Образование",
            (DisplayLocale::Ru, Heading::Skills) => "Навыки",
            (DisplayLocale::Ru, Heading::Contacts) => "Контакты",
        }
    }

    /// Name of the single series in the skill chart
    pub fn skills_series(self) -> &'static str {
        self.heading(Heading::Skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(DisplayLocale::parse("en"), Some(DisplayLocale::En));
        assert_eq!(DisplayLocale::parse("ru-RU"), Some(DisplayLocale::Ru));
        assert_eq!(DisplayLocale::parse("RU"), Some(DisplayLocale::Ru));
        assert_eq!(DisplayLocale::parse("de"), None);
        assert_eq!(DisplayLocale::parse(""), None);
    }

    #[test]
    fn test_defaults_to_russian() {
        assert_eq!(DisplayLocale::default(), DisplayLocale::Ru);
        assert_eq!(DisplayLocale::default().present(), "По настоящее время");
    }

    #[test]
    fn test_month_year() {
        assert_eq!(DisplayLocale::En.month_year(1, 2020), "Jan 2020");
        assert_eq!(DisplayLocale::Ru.month_year(5, 2023), "май 2023 г.");
    }

    #[test]
    fn test_headings() {
        assert_eq!(DisplayLocale::Ru.heading(Heading::Experience), "Опыт работы");
        assert_eq!(DisplayLocale::En.skills_series(), "Skills");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&DisplayLocale::Ru).unwrap();
        assert_eq!(json, "\"ru\"");
    }
}
