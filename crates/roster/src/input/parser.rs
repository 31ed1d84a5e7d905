//! CSV/TSV parser with delimiter detection and column typing.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::cell::CellValue;
use super::source::{DataTable, SourceMetadata};
use crate::error::{Result, RosterError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Cell contents that load as missing values.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_LITERALS: &[&str] = &["True", "true", "TRUE"];
const FALSE_LITERALS: &[&str] = &["False", "false", "FALSE"];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Exact cell contents treated as missing.
    pub na_values: Vec<String>,
    /// Type whole columns as integer/float/bool when every value allows it.
    pub infer_types: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
            infer_types: true,
        }
    }
}

impl ParserConfig {
    /// Use a fixed delimiter instead of detecting one.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Keep every non-missing cell as text.
    pub fn without_type_inference(mut self) -> Self {
        self.infer_types = false;
        self
    }
}

/// Parses delimited text into a [`DataTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| RosterError::io(path, e))?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let data_table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            path = %path.display(),
            format = %format,
            rows = data_table.row_count(),
            columns = data_table.column_count(),
            "parsed source file"
        );

        let source_metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            data_table.row_count(),
            data_table.column_count(),
        );

        Ok((data_table, source_metadata))
    }

    /// Parse in-memory text, detecting the delimiter unless one is configured.
    pub fn parse_str(&self, text: &str) -> Result<DataTable> {
        let bytes = text.as_bytes();
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };
        self.parse_bytes(bytes, delimiter)
    }

    /// Parse bytes with a known delimiter.
    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(RosterError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let mut raw_rows: Vec<Vec<Option<String>>> = Vec::new();

        for result in reader.records() {
            let record = result?;
            let mut row: Vec<Option<String>> = record
                .iter()
                .map(|field| {
                    if self.is_na(field) {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect();

            // Pad or truncate ragged rows
            row.resize(expected_cols, None);
            raw_rows.push(row);
        }

        let kinds: Vec<ColumnKind> = (0..expected_cols)
            .map(|col| {
                if self.config.infer_types {
                    infer_kind(raw_rows.iter().filter_map(|row| row[col].as_deref()))
                } else {
                    ColumnKind::Text
                }
            })
            .collect();

        let rows = raw_rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&kinds)
                    .map(|(cell, kind)| match cell {
                        Some(text) => kind.convert(text),
                        None => CellValue::Missing,
                    })
                    .collect()
            })
            .collect();

        Ok(DataTable::new(headers, rows))
    }

    fn is_na(&self, field: &str) -> bool {
        self.config.na_values.iter().any(|na| na == field)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage type for a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
}

impl ColumnKind {
    fn convert(self, text: String) -> CellValue {
        let trimmed = text.trim();
        match self {
            ColumnKind::Integer => trimmed
                .parse::<i64>()
                .map(CellValue::Integer)
                .unwrap_or(CellValue::Text(text)),
            ColumnKind::Float => trimmed
                .parse::<f64>()
                .map(CellValue::Float)
                .unwrap_or(CellValue::Text(text)),
            ColumnKind::Bool => CellValue::Bool(TRUE_LITERALS.contains(&trimmed)),
            ColumnKind::Text => CellValue::Text(text),
        }
    }
}

/// Pick the narrowest kind every non-missing value fits.
///
/// A column with no values at all stays text; its cells are all missing
/// anyway.
fn infer_kind<'a>(values: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut seen = false;
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;

    for value in values {
        seen = true;
        let trimmed = value.trim();
        if all_int && trimmed.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && !is_decimal_number(trimmed) {
            all_float = false;
        }
        if all_bool && !TRUE_LITERALS.contains(&trimmed) && !FALSE_LITERALS.contains(&trimmed) {
            all_bool = false;
        }
        if !all_int && !all_float && !all_bool {
            return ColumnKind::Text;
        }
    }

    if !seen {
        ColumnKind::Text
    } else if all_int {
        ColumnKind::Integer
    } else if all_float {
        ColumnKind::Float
    } else if all_bool {
        ColumnKind::Bool
    } else {
        ColumnKind::Text
    }
}

/// Decimal literals only; Rust also accepts words like "inf" and "nan".
fn is_decimal_number(value: &str) -> bool {
    let has_digit = value.bytes().any(|b| b.is_ascii_digit());
    has_digit
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
        && value.parse::<f64>().is_ok()
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(RosterError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tab gets a slight bonus
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted_commas() {
        let data = b"name;area\n\"Smith, A\";Perth\n\"Lee, B\";Hobart";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let table = parser
            .parse_str("name,area,exp as support worker\nAlice,Sydney CBD,2 years\nBob,,6 months")
            .unwrap();

        assert_eq!(table.headers, vec!["name", "area", "exp as support worker"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some(&CellValue::text("Alice")));
        assert_eq!(table.get(1, 1), Some(&CellValue::Missing));
        assert_eq!(table.get(1, 2), Some(&CellValue::text("6 months")));
    }

    #[test]
    fn test_column_type_inference() {
        let parser = Parser::new();
        let table = parser
            .parse_str("id,score,flag,mixed\n1,2.5,True,3\n2,4,False,three\n")
            .unwrap();

        assert_eq!(table.get(0, 0), Some(&CellValue::Integer(1)));
        assert_eq!(table.get(1, 1), Some(&CellValue::Float(4.0)));
        assert_eq!(table.get(0, 2), Some(&CellValue::Bool(true)));
        assert_eq!(table.get(1, 2), Some(&CellValue::Bool(false)));
        assert_eq!(table.get(0, 3), Some(&CellValue::text("3")));
    }

    #[test]
    fn test_inference_can_be_disabled() {
        let parser = Parser::with_config(ParserConfig::default().without_type_inference());
        let table = parser.parse_str("exp\n3\n5\n").unwrap();
        assert_eq!(table.get(0, 0), Some(&CellValue::text("3")));
    }

    #[test]
    fn test_words_like_nan_do_not_make_numeric_columns() {
        let parser = Parser::new();
        let table = parser.parse_str("area\ninf\ninfinity\n").unwrap();
        assert_eq!(table.get(0, 0), Some(&CellValue::text("inf")));
    }

    #[test]
    fn test_na_markers() {
        let parser = Parser::new();
        let table = parser.parse_str("name,area\nNA,N/A\nnull,Perth\n").unwrap();
        assert_eq!(table.get(0, 0), Some(&CellValue::Missing));
        assert_eq!(table.get(0, 1), Some(&CellValue::Missing));
        assert_eq!(table.get(1, 0), Some(&CellValue::Missing));
        assert_eq!(table.get(1, 1), Some(&CellValue::text("Perth")));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let parser = Parser::new();
        let table = parser.parse_str("name,area\n").unwrap();
        assert_eq!(table.column_count(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_input_is_error() {
        let parser = Parser::new();
        assert!(matches!(parser.parse_str(""), Err(RosterError::EmptyData(_))));
    }

    #[test]
    fn test_bom_and_header_whitespace_stripped() {
        let parser = Parser::new();
        let table = parser.parse_str("\u{feff} name ,area\nAnn,Perth\n").unwrap();
        assert_eq!(table.headers, vec!["name", "area"]);
    }

    #[test]
    fn test_ragged_rows() {
        let parser = Parser::with_config(ParserConfig::default().with_delimiter(b','));
        let table = parser.parse_str("a,b,c\n1\n1,2,3,4\n").unwrap();
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[1].len(), 3);
        assert_eq!(table.get(0, 2), Some(&CellValue::Missing));
    }
}
