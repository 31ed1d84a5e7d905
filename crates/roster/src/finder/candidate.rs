//! Candidates read back from a clean table.

use serde::Serialize;

use crate::input::{CellValue, DataTable};
use crate::transform::{AUSTRALIAN_FIELD, EXPERIENCE_FIELD, NAME_FIELD, REGION_FIELD};

/// Regions a candidate can be listed under.
pub const LISTED_REGIONS: &[&str] = &[
    "Sydney",
    "Melbourne",
    "Brisbane",
    "Adelaide",
    "Perth",
    "Canberra",
    "Hobart",
    "Darwin",
    "Gold Coast",
    "Sunshine Coast",
    "Newcastle",
    "Wollongong",
    "Geelong",
];

/// State and territory abbreviations mapped to their capital.
const STATE_CAPITALS: &[(&str, &str)] = &[
    ("nsw", "Sydney"),
    ("vic", "Melbourne"),
    ("qld", "Brisbane"),
    ("sa", "Adelaide"),
    ("wa", "Perth"),
    ("act", "Canberra"),
    ("tas", "Hobart"),
    ("nt", "Darwin"),
];

/// A support worker as listed to participants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// 1-based row position in the clean file.
    pub id: String,
    pub name: String,
    pub region: String,
    pub is_australian: bool,
    pub experience_years: f64,
    pub qualification: String,
    pub previous_role: String,
    pub previous_work_place: String,
    #[serde(skip)]
    pub(crate) name_lc: String,
}

impl Candidate {
    /// Build candidates from a clean table, in row order.
    ///
    /// Rows whose region is not one of [`LISTED_REGIONS`] (after mapping
    /// state abbreviations) are left out; ids still count them.
    pub fn from_table(table: &DataTable) -> Vec<Candidate> {
        let column = |name: &str| table.column_index(name);
        let name_idx = column(NAME_FIELD);
        let region_idx = column(REGION_FIELD);
        let australian_idx = column(AUSTRALIAN_FIELD);
        let experience_idx = column(EXPERIENCE_FIELD);
        let qualification_idx = column("qualification");
        let role_idx = column("previous_role");
        let workplace_idx = column("previous_work_place");

        table
            .rows
            .iter()
            .enumerate()
            .filter_map(|(position, row)| {
                let region = listed_region(&text(row, region_idx))?;
                let name = text(row, name_idx).trim().to_string();
                Some(Candidate {
                    id: (position + 1).to_string(),
                    name_lc: name.to_lowercase(),
                    name,
                    region,
                    is_australian: is_affirmative(&text(row, australian_idx)),
                    experience_years: years(&text(row, experience_idx)),
                    qualification: text(row, qualification_idx),
                    previous_role: text(row, role_idx),
                    previous_work_place: text(row, workplace_idx),
                })
            })
            .collect()
    }
}

fn text(row: &[CellValue], idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i))
        .map(CellValue::render)
        .unwrap_or_default()
}

/// Map a stored region to a listed region, if it is one.
///
/// Only the part before the first `,` `/` `|` or `-` counts, so
/// "Sydney - Inner West" lists under Sydney.
pub fn listed_region(raw: &str) -> Option<String> {
    let head = raw.split([',', '/', '|', '-']).next().unwrap_or_default();
    let cased = word_case(head);

    if let Some((_, capital)) = STATE_CAPITALS
        .iter()
        .find(|(abbr, _)| cased.eq_ignore_ascii_case(abbr))
    {
        return Some(capital.to_string());
    }

    LISTED_REGIONS
        .iter()
        .find(|region| **region == cased)
        .map(|region| region.to_string())
}

/// Lower-case, collapse whitespace and capitalize each word.
fn word_case(text: &str) -> String {
    let collapsed = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::with_capacity(collapsed.len());
    let mut prev_is_word = false;
    for ch in collapsed.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }
    out
}

fn is_affirmative(value: &str) -> bool {
    ["true", "yes", "y", "1"]
        .iter()
        .any(|word| value.eq_ignore_ascii_case(word))
}

/// Experience in years; anything unparseable counts as zero.
fn years(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
