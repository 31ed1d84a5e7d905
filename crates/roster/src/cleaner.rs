//! Main Cleaner struct and public API.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{Result, RosterError};
use crate::export::{ExportFormat, Exporter};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::transform::{AssemblerConfig, AssemblyResult, CleanTable, TableAssembler};

/// Default survey export read by [`Cleaner::run`].
pub const DEFAULT_INPUT_PATH: &str = "data.csv";
/// Default CSV output.
pub const DEFAULT_CSV_PATH: &str = "support_workers_clean.csv";
/// Default JSON output.
pub const DEFAULT_JSON_PATH: &str = "support_workers_clean.json";

/// Configuration for a cleaning run.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Column layout for assembly.
    pub assembler: AssemblerConfig,
    /// Survey export to read.
    pub input_path: PathBuf,
    /// Where the CSV copy is written.
    pub csv_path: PathBuf,
    /// Where the JSON copy is written.
    pub json_path: PathBuf,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            assembler: AssemblerConfig::default(),
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
        }
    }
}

impl CleanerConfig {
    /// Read from and write to a different directory, keeping file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input_path: dir.join(DEFAULT_INPUT_PATH),
            csv_path: dir.join(DEFAULT_CSV_PATH),
            json_path: dir.join(DEFAULT_JSON_PATH),
            ..Self::default()
        }
    }
}

/// Outcome of a cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Output column names in order.
    pub columns: Vec<String>,
    /// Housekeeping columns removed from the source.
    pub dropped_columns: Vec<String>,
    /// Recognized source columns that were absent.
    pub missing_columns: Vec<String>,
    /// How many fields each normalizer resolved.
    pub summary: CleanSummary,
    /// Files written, in write order.
    pub outputs: Vec<PathBuf>,
}

/// Counts of non-null output fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanSummary {
    pub rows: usize,
    pub names: usize,
    pub regions: usize,
    pub residency: usize,
    pub experience: usize,
}

impl CleanSummary {
    /// Count resolved fields in a clean table.
    pub fn of(table: &CleanTable) -> Self {
        let records = table.records();
        Self {
            rows: records.len(),
            names: records.iter().filter(|r| !r.name.is_missing()).count(),
            regions: records.iter().filter(|r| r.region.is_some()).count(),
            residency: records.iter().filter(|r| r.is_australian.is_some()).count(),
            experience: records.iter().filter(|r| r.experience_years.is_some()).count(),
        }
    }
}

/// Loads a survey export, cleans it and writes both output formats.
pub struct Cleaner {
    config: CleanerConfig,
    parser: Parser,
    assembler: TableAssembler,
    exporter: Exporter,
}

impl Cleaner {
    /// Create a cleaner with default configuration.
    pub fn new() -> Self {
        Self {
            config: CleanerConfig::default(),
            parser: Parser::new(),
            assembler: TableAssembler::new(),
            exporter: Exporter::new(),
        }
    }

    /// Create a cleaner with custom configuration.
    ///
    /// The input and both outputs must be distinct files.
    pub fn with_config(config: CleanerConfig) -> Result<Self> {
        if config.csv_path == config.json_path {
            return Err(RosterError::Config(format!(
                "CSV and JSON outputs both point at '{}'",
                config.csv_path.display()
            )));
        }
        if config.input_path == config.csv_path || config.input_path == config.json_path {
            return Err(RosterError::Config(format!(
                "output would overwrite the input '{}'",
                config.input_path.display()
            )));
        }

        let parser = Parser::with_config(config.parser.clone());
        let assembler = TableAssembler::with_config(config.assembler.clone());

        Ok(Self {
            config,
            parser,
            assembler,
            exporter: Exporter::new(),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Clean an already-loaded table.
    pub fn clean_table(&self, table: &DataTable) -> AssemblyResult {
        self.assembler.assemble(table)
    }

    /// Run the whole pipeline: load, assemble, write CSV, write JSON.
    ///
    /// A load failure writes nothing. A failed JSON write leaves the CSV
    /// already on disk.
    pub fn run(&self) -> Result<CleanReport> {
        let (table, source) = self.parser.parse_file(&self.config.input_path)?;
        info!(
            file = %source.file,
            rows = source.row_count,
            columns = source.column_count,
            "loaded survey export"
        );

        let AssemblyResult {
            table: clean,
            dropped_columns,
            missing_columns,
        } = self.clean_table(&table);

        let mut outputs = Vec::with_capacity(2);
        for (path, format) in [
            (&self.config.csv_path, ExportFormat::Csv),
            (&self.config.json_path, ExportFormat::Json),
        ] {
            self.exporter.export(&clean, path, format)?;
            outputs.push(path.clone());
        }

        Ok(CleanReport {
            source,
            columns: clean.columns().into_iter().map(String::from).collect(),
            dropped_columns,
            missing_columns,
            summary: CleanSummary::of(&clean),
            outputs,
        })
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}
