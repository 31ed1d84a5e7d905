//! Loosely typed cell values.

use serde::{Serialize, Serializer};

/// A single cell as read from a delimited source.
///
/// Columns are typed at load time, so one column holds text in one file and
/// numbers in another. Normalizers check the variant on entry and treat any
/// non-text value as unknown.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell or a recognized NA marker.
    #[default]
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Create a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Returns the text if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns true for missing cells.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Render the value the way it is written to a delimited file.
    ///
    /// Missing cells render empty, booleans as `True`/`False`, and floats keep
    /// a trailing `.0` when integral.
    pub fn render(&self) -> String {
        match self {
            CellValue::Missing => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => format_float(*f),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
        }
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map(CellValue::Text).unwrap_or_default()
    }
}

impl From<Option<bool>> for CellValue {
    fn from(value: Option<bool>) -> Self {
        value.map(CellValue::Bool).unwrap_or_default()
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(f) if f.is_finite() => CellValue::Float(f),
            _ => CellValue::Missing,
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Missing => serializer.serialize_none(),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            CellValue::Float(_) => serializer.serialize_none(),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Shortest round-trip form, always with a fractional part.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    // Debug formatting keeps `.0` on integral values (`3.0`) and matches
    // the round-trip representation for everything else.
    format!("{:?}", value)
}
