//! Data source abstraction and metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::cell::CellValue;

static MISSING: CellValue = CellValue::Missing;

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Tabular data with named columns and typed cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data (row-major order). Every row has one cell per header.
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table of text cells; empty strings become missing.
    pub fn from_text_rows<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<CellValue> = row
                    .into_iter()
                    .map(|c| {
                        let c: String = c.into();
                        if c.is_empty() {
                            CellValue::Missing
                        } else {
                            CellValue::Text(c)
                        }
                    })
                    .collect();
                cells.resize(headers.len(), CellValue::Missing);
                cells
            })
            .collect();
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a column index by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Returns true if a column with this exact name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&MISSING))
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<Vec<&CellValue>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Keep only the columns whose name satisfies the predicate.
    ///
    /// Returns the names of the removed columns, in their original order.
    pub fn retain_columns(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<String> {
        let mask: Vec<bool> = self.headers.iter().map(|h| keep(h.as_str())).collect();
        if mask.iter().all(|&k| k) {
            return Vec::new();
        }

        let mut removed = Vec::new();
        let mut headers = Vec::with_capacity(self.headers.len());
        for (header, &k) in std::mem::take(&mut self.headers).into_iter().zip(&mask) {
            if k {
                headers.push(header);
            } else {
                removed.push(header);
            }
        }
        self.headers = headers;

        for row in &mut self.rows {
            let mut idx = 0;
            row.retain(|_| {
                let k = mask.get(idx).copied().unwrap_or(true);
                idx += 1;
                k
            });
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataTable {
        DataTable::from_text_rows(
            ["Unnamed: 0", "name", "area"],
            vec![vec!["0", "Ann", "Perth"], vec!["1", "Bo", ""]],
        )
    }

    #[test]
    fn test_lookup() {
        let table = sample();
        assert_eq!(table.column_index("name"), Some(1));
        assert_eq!(table.column_index("Name"), None);
        assert_eq!(table.get(0, 1), Some(&CellValue::text("Ann")));
        assert_eq!(table.get(1, 2), Some(&CellValue::Missing));
    }

    #[test]
    fn test_column_by_name() {
        let table = sample();
        assert_eq!(
            table.column("area"),
            Some(vec![&CellValue::text("Perth"), &CellValue::Missing])
        );
        assert_eq!(table.column("Area"), None);
    }

    #[test]
    fn test_retain_columns() {
        let mut table = sample();
        let removed = table.retain_columns(|h| !h.to_lowercase().contains("unnamed"));

        assert_eq!(removed, vec!["Unnamed: 0"]);
        assert_eq!(table.headers, vec!["name", "area"]);
        assert_eq!(table.rows[0], vec![CellValue::text("Ann"), CellValue::text("Perth")]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_retain_all_is_noop() {
        let mut table = sample();
        assert!(table.retain_columns(|_| true).is_empty());
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = DataTable::from_text_rows(["a", "b"], vec![vec!["x"]]);
        assert_eq!(table.rows[0], vec![CellValue::text("x"), CellValue::Missing]);
    }
}
