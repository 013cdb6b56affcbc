use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed classification used for the tabbed seminar catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Leadership,
    Change,
    Health,
    Communication,
    Management,
}

impl Category {
    /// Tab order on the page.
    pub const ALL: [Category; 5] = [
        Category::Leadership,
        Category::Management,
        Category::Communication,
        Category::Change,
        Category::Health,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Leadership => "leadership",
            Category::Change => "change",
            Category::Health => "health",
            Category::Communication => "communication",
            Category::Management => "management",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Leadership => "Führung",
            Category::Change => "Veränderung",
            Category::Health => "Gesundheit & Persönlichkeit",
            Category::Communication => "Kommunikation",
            Category::Management => "Management & Vertrieb",
        }
    }

    /// Inline SVG shown in the card header.
    pub fn icon_svg(self) -> &'static str {
        match self {
            Category::Leadership => {
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.87"/></svg>"#
            }
            Category::Change => {
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M21 12a9 9 0 1 1-3-6.7"/><polyline points="21 3 21 9 15 9"/></svg>"#
            }
            Category::Health => {
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M20.8 4.6a5.5 5.5 0 0 0-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 0 0-7.8 7.8L12 21.2l8.8-8.8a5.5 5.5 0 0 0 0-7.8z"/></svg>"#
            }
            Category::Communication => {
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/></svg>"#
            }
            Category::Management => {
                r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><rect x="3" y="3" width="18" height="18" rx="2"/><line x1="3" y1="9" x2="21" y2="9"/><line x1="9" y1="21" x2="9" y2="9"/></svg>"#
            }
        }
    }

    /// Parse an externally supplied category, falling back to the default tab.
    pub fn parse_or_default(raw: Option<&str>) -> Category {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown seminar category '{}'", self.0)
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Long-form content shown on the seminar detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeminarContent {
    pub intro: String,
    pub goals: Vec<String>,
    /// Agenda items, listed on the detail page in authored order.
    pub topics: Vec<String>,
    pub benefit: String,
    pub audience: String,
}

/// One catalog entry describing a training offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeminarRecord {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub badge: String,
    pub short_description: String,
    pub details: Vec<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    pub content: SeminarContent,
}

impl SeminarRecord {
    pub fn detail_href(&self) -> String {
        format!("/seminar?id={}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Health".parse::<Category>(), Ok(Category::Health));
        assert_eq!(" change ".parse::<Category>(), Ok(Category::Change));
    }

    #[test]
    fn unknown_category_falls_back_to_leadership() {
        assert_eq!(Category::parse_or_default(Some("gardening")), Category::Leadership);
        assert_eq!(Category::parse_or_default(None), Category::Leadership);
        assert_eq!(Category::parse_or_default(Some("management")), Category::Management);
    }

    #[test]
    fn every_category_is_a_tab_once() {
        for c in Category::ALL {
            assert_eq!(Category::ALL.iter().filter(|x| **x == c).count(), 1);
            assert_eq!(c.slug().parse::<Category>(), Ok(c));
        }
    }

    #[test]
    fn topics_keep_abbreviations_and_decimals_intact() {
        let content: SeminarContent = serde_json::from_str(
            r#"{"intro":"","goals":[],"topics":["Feedback, z. B. im Jahresgespräch","Die 1.5-Stunden-Regel"],
                "benefit":"","audience":""}"#,
        )
        .unwrap();
        assert_eq!(
            content.topics,
            vec!["Feedback, z. B. im Jahresgespräch".to_string(), "Die 1.5-Stunden-Regel".to_string()]
        );
    }
}
