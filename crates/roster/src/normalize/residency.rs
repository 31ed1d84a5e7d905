//! Residency classification for citizenship and visa answers.

use crate::input::CellValue;

/// Phrases that mark a citizen or permanent resident.
pub const DEFAULT_RESIDENT_KEYWORDS: &[&str] = &[
    "australian citizen",
    "i'm an australian citizen",
    "permanent resident",
    "pr",
    "nz citizen",
];

/// Phrases that mark a temporary visa holder.
pub const DEFAULT_NON_RESIDENT_KEYWORDS: &[&str] = &[
    "temporary visa",
    "bridging",
    "student",
    "no restrictions",
    "408",
    "tss",
    "whv",
];

/// Classifies residency answers as citizen/PR (`true`), temporary (`false`),
/// or undetermined (`None`).
///
/// Matching is a plain substring test on the lower-cased answer. Resident
/// keywords are checked first, so an answer matching both sets is `true`.
/// Short keywords like "pr" match inside longer words too ("approved").
#[derive(Debug, Clone)]
pub struct ResidencyClassifier {
    resident: Vec<String>,
    non_resident: Vec<String>,
}

impl ResidencyClassifier {
    /// Create a classifier with the default keyword sets.
    pub fn new() -> Self {
        Self::with_keywords(
            DEFAULT_RESIDENT_KEYWORDS.iter().copied(),
            DEFAULT_NON_RESIDENT_KEYWORDS.iter().copied(),
        )
    }

    /// Create a classifier with custom keyword sets.
    pub fn with_keywords<R, N, S, T>(resident: R, non_resident: N) -> Self
    where
        R: IntoIterator<Item = S>,
        N: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            resident: resident.into_iter().map(|k| k.into().to_lowercase()).collect(),
            non_resident: non_resident
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    /// Classify a cell. Non-text cells are undetermined.
    pub fn classify(&self, value: &CellValue) -> Option<bool> {
        value.as_text().and_then(|text| self.classify_str(text))
    }

    /// Classify a text answer.
    pub fn classify_str(&self, text: &str) -> Option<bool> {
        let s = text.trim().to_lowercase();

        if self.resident.iter().any(|k| s.contains(k.as_str())) {
            return Some(true);
        }
        if self.non_resident.iter().any(|k| s.contains(k.as_str())) {
            return Some(false);
        }
        None
    }
}

impl Default for ResidencyClassifier {
    fn default() -> Self {
        Self::new()
    }
}
