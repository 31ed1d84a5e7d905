//! CSV and JSON writers for clean tables.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Result, RosterError};
use crate::transform::CleanTable;

/// Serialized output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Header row plus one comma-separated row per record; nulls are empty.
    Csv,
    /// Array of record objects; nulls are written as `null`.
    Json,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Writes clean tables to disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exporter;

impl Exporter {
    /// Create a new exporter.
    pub fn new() -> Self {
        Self
    }

    /// Write a table in the given format.
    pub fn export(
        &self,
        table: &CleanTable,
        path: impl AsRef<Path>,
        format: ExportFormat,
    ) -> Result<()> {
        let path = path.as_ref();
        let writer = create(path)?;

        match format {
            ExportFormat::Csv => write_csv(table, writer)?,
            ExportFormat::Json => write_json(table, writer)?,
        }

        info!(
            path = %path.display(),
            rows = table.len(),
            format = format.extension(),
            "wrote clean table"
        );
        Ok(())
    }

    /// Write a table as CSV.
    pub fn write_csv(&self, table: &CleanTable, path: impl AsRef<Path>) -> Result<()> {
        self.export(table, path, ExportFormat::Csv)
    }

    /// Write a table as JSON records.
    pub fn write_json(&self, table: &CleanTable, path: impl AsRef<Path>) -> Result<()> {
        self.export(table, path, ExportFormat::Json)
    }
}

/// Open a buffered file, creating the parent directory if needed.
fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| RosterError::io(parent, e))?;
        }
    }

    let file = File::create(path).map_err(|e| RosterError::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// Write CSV to any writer.
pub fn write_csv<W: Write>(table: &CleanTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.columns())?;
    for record in table.records() {
        let row: Vec<String> = table
            .row_values(record)
            .iter()
            .map(|cell| cell.render())
            .collect();
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write JSON records to any writer.
pub fn write_json<W: Write>(table: &CleanTable, mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, table)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}
