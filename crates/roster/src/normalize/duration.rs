//! Experience duration parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::CellValue;

static FIRST_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)").unwrap());
static YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+\.?[0-9]*)\s*(years?|yrs?|y)").unwrap());
static MONTHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+\.?[0-9]*)\s*(months?|mos?|m)").unwrap());
static BARE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([0-9]+\.?[0-9]*)\s*$").unwrap());

/// Parses free-text experience answers into years.
///
/// Rules are tried in order and the first that applies decides:
///
/// 1. "no experience" or "none" anywhere → `0.0`
/// 2. "more than" anywhere → the first whole number, or `None` without one
/// 3. a number followed by a year unit (`year(s)`, `yr(s)`, `y`)
/// 4. a number followed by a month unit (`month(s)`, `mo(s)`, `m`), divided by 12
/// 5. a bare number, taken as years
///
/// Anything else is `None`. Results are never negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationParser;

impl DurationParser {
    /// Create a new duration parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a cell. Non-text cells are unknown.
    pub fn parse(&self, value: &CellValue) -> Option<f64> {
        value.as_text().and_then(|text| self.parse_str(text))
    }

    /// Parse a text answer.
    pub fn parse_str(&self, text: &str) -> Option<f64> {
        let s = text.trim().to_lowercase();

        if s.contains("no experience") || s.contains("none") {
            return Some(0.0);
        }

        if s.contains("more than") {
            return FIRST_DIGITS.captures(&s).and_then(|c| number(&c[1]));
        }

        if let Some(caps) = YEARS.captures(&s) {
            return number(&caps[1]);
        }

        if let Some(caps) = MONTHS.captures(&s) {
            return number(&caps[1]).map(|months| months / 12.0);
        }

        BARE_NUMBER.captures(&s).and_then(|c| number(&c[1]))
    }
}

fn number(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}
