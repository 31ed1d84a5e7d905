//! Region normalization for free-text location answers.

use crate::input::CellValue;

/// Canonical cities recognized by default, in match priority order.
pub const DEFAULT_CITIES: &[&str] = &[
    "Sydney",
    "Melbourne",
    "Brisbane",
    "Adelaide",
    "Perth",
    "Canberra",
];

/// Maps a location answer to a canonical city name.
///
/// The first city (in list order) whose lower-cased name appears anywhere in
/// the answer wins, so "Sydney, not Melbourne" is Sydney. Answers naming no
/// known city are trimmed and title-cased instead.
#[derive(Debug, Clone)]
pub struct RegionNormalizer {
    /// (lower-cased needle, canonical name)
    cities: Vec<(String, String)>,
}

impl RegionNormalizer {
    /// Create a normalizer for the default Australian cities.
    pub fn new() -> Self {
        Self::with_cities(DEFAULT_CITIES.iter().copied())
    }

    /// Create a normalizer for a custom city list, highest priority first.
    pub fn with_cities<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cities = cities
            .into_iter()
            .map(|c| {
                let canonical: String = c.into();
                (canonical.to_lowercase(), canonical)
            })
            .collect();
        Self { cities }
    }

    /// Canonical names in priority order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|(_, canonical)| canonical.as_str())
    }

    /// Normalize a cell. Non-text cells have no region.
    pub fn normalize(&self, value: &CellValue) -> Option<String> {
        value.as_text().map(|text| self.normalize_str(text))
    }

    /// Normalize a text answer.
    pub fn normalize_str(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        self.cities
            .iter()
            .find(|(needle, _)| lower.contains(needle.as_str()))
            .map(|(_, canonical)| canonical.clone())
            .unwrap_or_else(|| title_case(text.trim()))
    }
}

impl Default for RegionNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-case the way Python's `str.title` does.
///
/// A character following a cased letter is lower-cased; any other character
/// is title-cased. "inner west" becomes "Inner West", "o'connor" becomes
/// "O'Connor" and "x中y" becomes "X中Y".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_cased = false;

    for ch in text.chars() {
        if prev_is_cased {
            out.extend(ch.to_lowercase());
        } else {
            push_titlecase(&mut out, ch);
        }
        prev_is_cased = is_cased(ch);
    }

    out
}

/// Latin digraphs with a distinct titlecase form: (upper, title, lower).
const DIGRAPHS: &[(char, char, char)] = &[
    ('\u{01C4}', '\u{01C5}', '\u{01C6}'),
    ('\u{01C7}', '\u{01C8}', '\u{01C9}'),
    ('\u{01CA}', '\u{01CB}', '\u{01CC}'),
    ('\u{01F1}', '\u{01F2}', '\u{01F3}'),
];

fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase() || digraph(ch).is_some()
}

fn digraph(ch: char) -> Option<char> {
    DIGRAPHS
        .iter()
        .find(|(upper, title, lower)| ch == *upper || ch == *title || ch == *lower)
        .map(|(_, title, _)| *title)
}

/// First character upper-cased, any expansion lower-cased ("ß" → "Ss").
fn push_titlecase(out: &mut String, ch: char) {
    if let Some(title) = digraph(ch) {
        out.push(title);
        return;
    }

    let mut upper = ch.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> Option<String> {
        RegionNormalizer::new().normalize(&CellValue::text(text))
    }

    #[test]
    fn test_known_city_substring() {
        assert_eq!(normalize("Sydney NSW 2000").as_deref(), Some("Sydney"));
        assert_eq!(normalize("greater MELBOURNE area").as_deref(), Some("Melbourne"));
        assert_eq!(normalize("north perth").as_deref(), Some("Perth"));
        assert_eq!(normalize("Canberra").as_deref(), Some("Canberra"));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(normalize("Brisbane or Sydney").as_deref(), Some("Sydney"));
        assert_eq!(normalize("adelaide / perth").as_deref(), Some("Adelaide"));
    }

    #[test]
    fn test_title_case_fallback() {
        assert_eq!(normalize("  inner west  ").as_deref(), Some("Inner West"));
        assert_eq!(normalize("GOLD COAST").as_deref(), Some("Gold Coast"));
        assert_eq!(normalize("o'connor").as_deref(), Some("O'Connor"));
        assert_eq!(normalize("").as_deref(), Some(""));
    }

    #[test]
    fn test_title_case_unicode() {
        assert_eq!(title_case("ßtraße"), "Sstraße");
        assert_eq!(title_case("x中y"), "X中Y");
        assert_eq!(title_case("\u{01C6}emal"), "\u{01C5}emal");
        assert_eq!(title_case("ÉCOLE du nord"), "École Du Nord");
        assert_eq!(title_case("3rd street"), "3Rd Street");
    }

    #[test]
    fn test_non_text_is_unknown() {
        let normalizer = RegionNormalizer::new();
        assert_eq!(normalizer.normalize(&CellValue::Integer(42)), None);
        assert_eq!(normalizer.normalize(&CellValue::Float(4.2)), None);
        assert_eq!(normalizer.normalize(&CellValue::Missing), None);
        assert_eq!(normalizer.normalize(&CellValue::Bool(true)), None);
    }

    #[test]
    fn test_canonical_names_are_stable() {
        let normalizer = RegionNormalizer::new();
        for city in DEFAULT_CITIES {
            assert_eq!(normalizer.normalize_str(city), *city);
        }
    }

    #[test]
    fn test_custom_cities() {
        let normalizer = RegionNormalizer::with_cities(["Hobart", "Darwin"]);
        assert_eq!(normalizer.normalize_str("south hobart"), "Hobart");
        assert_eq!(normalizer.normalize_str("sydney"), "Sydney");
        assert_eq!(normalizer.cities().collect::<Vec<_>>(), vec!["Hobart", "Darwin"]);
    }
}
