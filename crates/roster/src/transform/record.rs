//! Output records and the clean table they form.

use indexmap::IndexMap;
use serde::Serialize;

use crate::input::{CellValue, DataTable};

/// Output column holding the respondent's name.
pub const NAME_FIELD: &str = "name";
/// Output column holding the canonical region.
pub const REGION_FIELD: &str = "region";
/// Output column holding the citizen/PR flag.
pub const AUSTRALIAN_FIELD: &str = "is_australian";
/// Output column holding experience in years.
pub const EXPERIENCE_FIELD: &str = "experience_years";

/// One normalized survey response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CleanRecord {
    /// Name, copied as-is. Missing when the source had no name column.
    pub name: CellValue,
    pub region: Option<String>,
    /// `None` means the answer could not be classified, not "no".
    pub is_australian: Option<bool>,
    pub experience_years: Option<f64>,
    /// Pass-through fields keyed by output column name.
    pub extra: IndexMap<String, CellValue>,
}

impl CleanRecord {
    /// Look up a field by output column name.
    pub fn get(&self, column: &str) -> Option<CellValue> {
        match column {
            NAME_FIELD => Some(self.name.clone()),
            REGION_FIELD => Some(CellValue::from(self.region.clone())),
            AUSTRALIAN_FIELD => Some(CellValue::from(self.is_australian)),
            EXPERIENCE_FIELD => Some(CellValue::from(self.experience_years)),
            other => self.extra.get(other).cloned(),
        }
    }
}

/// The assembled output table.
///
/// Every clean table has `region`, `is_australian` and `experience_years`
/// columns. `name` and the pass-through columns exist only when the source
/// had them.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanTable {
    has_name: bool,
    extra_columns: Vec<String>,
    records: Vec<CleanRecord>,
}

impl CleanTable {
    pub(crate) fn new(
        has_name: bool,
        extra_columns: Vec<String>,
        records: Vec<CleanRecord>,
    ) -> Self {
        Self {
            has_name,
            extra_columns,
            records,
        }
    }

    /// Output column names in order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns = Vec::with_capacity(4 + self.extra_columns.len());
        if self.has_name {
            columns.push(NAME_FIELD);
        }
        columns.extend([REGION_FIELD, AUSTRALIAN_FIELD, EXPERIENCE_FIELD]);
        columns.extend(self.extra_columns.iter().map(String::as_str));
        columns
    }

    /// Returns true if the table has a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns().contains(&name)
    }

    /// Records in source row order.
    pub fn records(&self) -> &[CleanRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cells of one record in column order.
    pub fn row_values(&self, record: &CleanRecord) -> Vec<CellValue> {
        self.columns()
            .into_iter()
            .map(|column| record.get(column).unwrap_or_default())
            .collect()
    }

    /// Records as ordered field maps, the shape written to JSON.
    ///
    /// Null fields are kept as [`CellValue::Missing`] rather than dropped.
    pub fn to_json_records(&self) -> Vec<IndexMap<&str, CellValue>> {
        let columns = self.columns();
        self.records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|&column| (column, record.get(column).unwrap_or_default()))
                    .collect()
            })
            .collect()
    }

    /// Convert back into a [`DataTable`], e.g. to feed the output through
    /// another assembly pass.
    pub fn to_data_table(&self) -> DataTable {
        let headers = self.columns().into_iter().map(String::from).collect();
        let rows = self
            .records
            .iter()
            .map(|record| self.row_values(record))
            .collect();
        DataTable::new(headers, rows)
    }
}

impl Serialize for CleanTable {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        self.to_json_records().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CleanRecord {
        let mut extra = IndexMap::new();
        extra.insert("qualification".to_string(), CellValue::text("Cert III"));
        CleanRecord {
            name: CellValue::text("A. Smith"),
            region: Some("Sydney".to_string()),
            is_australian: None,
            experience_years: Some(3.0),
            extra,
        }
    }

    #[test]
    fn test_columns_with_name() {
        let table = CleanTable::new(true, vec!["qualification".into()], vec![record()]);
        assert_eq!(
            table.columns(),
            vec!["name", "region", "is_australian", "experience_years", "qualification"]
        );
    }

    #[test]
    fn test_columns_without_name() {
        let table = CleanTable::new(false, Vec::new(), Vec::new());
        assert_eq!(table.columns(), vec!["region", "is_australian", "experience_years"]);
        assert!(!table.has_column("name"));
    }

    #[test]
    fn test_row_values() {
        let table = CleanTable::new(true, vec!["qualification".into()], vec![record()]);
        assert_eq!(
            table.row_values(&table.records()[0]),
            vec![
                CellValue::text("A. Smith"),
                CellValue::text("Sydney"),
                CellValue::Missing,
                CellValue::Float(3.0),
                CellValue::text("Cert III"),
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let table = CleanTable::new(true, Vec::new(), vec![record()]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"A. Smith","region":"Sydney","is_australian":null,"experience_years":3.0}]"#
        );
    }

    #[test]
    fn test_to_data_table() {
        let table = CleanTable::new(false, Vec::new(), vec![record(), CleanRecord::default()]);
        let data = table.to_data_table();
        assert_eq!(data.headers, vec!["region", "is_australian", "experience_years"]);
        assert_eq!(data.row_count(), 2);
        assert_eq!(data.get(1, 0), Some(&CellValue::Missing));
    }
}
