//! Assembly of the clean table from a raw survey export.

use indexmap::IndexMap;
use tracing::debug;

use crate::input::{CellValue, DataTable};
use crate::normalize::{DurationParser, RegionNormalizer, ResidencyClassifier};

use super::record::{CleanRecord, CleanTable};

/// Column-name fragments that mark housekeeping columns.
pub const DEFAULT_DROP_PATTERNS: &[&str] = &["unnamed", "no need"];

/// Optional columns copied through unchanged.
pub const DEFAULT_PASSTHROUGH_COLUMNS: &[&str] =
    &["qualification", "previous role", "previous work place"];

/// Which source columns feed which output fields.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Columns whose lower-cased name contains any of these are dropped.
    pub drop_patterns: Vec<String>,
    /// Source column copied into `name`.
    pub name_column: String,
    /// Source column normalized into `region`.
    pub area_column: String,
    /// Source column classified into `is_australian`.
    pub residency_column: String,
    /// Source column parsed into `experience_years`.
    pub experience_column: String,
    /// Source columns copied through, output name has spaces replaced by `_`.
    pub passthrough_columns: Vec<String>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            drop_patterns: DEFAULT_DROP_PATTERNS.iter().map(|s| s.to_string()).collect(),
            name_column: "name".to_string(),
            area_column: "area".to_string(),
            residency_column: "australian".to_string(),
            experience_column: "exp as support worker".to_string(),
            passthrough_columns: DEFAULT_PASSTHROUGH_COLUMNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Result of assembling a clean table.
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    /// The clean table, one record per source row.
    pub table: CleanTable,
    /// Housekeeping columns removed before assembly.
    pub dropped_columns: Vec<String>,
    /// Recognized source columns that were not present.
    pub missing_columns: Vec<String>,
}

/// Builds a [`CleanTable`] from a raw [`DataTable`].
#[derive(Debug, Clone, Default)]
pub struct TableAssembler {
    config: AssemblerConfig,
    region: RegionNormalizer,
    residency: ResidencyClassifier,
    duration: DurationParser,
}

impl TableAssembler {
    /// Create an assembler for the default survey layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler with a custom column layout.
    pub fn with_config(config: AssemblerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the region normalizer.
    pub fn with_region_normalizer(mut self, region: RegionNormalizer) -> Self {
        self.region = region;
        self
    }

    /// Replace the residency classifier.
    pub fn with_residency_classifier(mut self, residency: ResidencyClassifier) -> Self {
        self.residency = residency;
        self
    }

    /// The column layout in use.
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Assemble the clean table.
    ///
    /// Rows are never added, removed or reordered. A missing source column
    /// leaves its output field empty; only `name` and the pass-through
    /// columns disappear from the output entirely.
    pub fn assemble(&self, source: &DataTable) -> AssemblyResult {
        let mut data = source.clone();
        let dropped_columns = data.retain_columns(|header| !self.is_dropped(header));
        if !dropped_columns.is_empty() {
            debug!(columns = ?dropped_columns, "dropped housekeeping columns");
        }

        let mut missing_columns = Vec::new();
        let mut lookup = |column: &str| {
            let index = data.column_index(column);
            if index.is_none() {
                debug!(column, "recognized column not present");
                missing_columns.push(column.to_string());
            }
            index
        };

        let name_idx = lookup(self.config.name_column.as_str());
        let area_idx = lookup(self.config.area_column.as_str());
        let residency_idx = lookup(self.config.residency_column.as_str());
        let experience_idx = lookup(self.config.experience_column.as_str());

        let extras: Vec<(String, usize)> = self
            .config
            .passthrough_columns
            .iter()
            .filter_map(|column| {
                data.column_index(column)
                    .map(|idx| (column.replace(' ', "_"), idx))
            })
            .collect();

        let records: Vec<CleanRecord> = data
            .rows
            .iter()
            .map(|row| CleanRecord {
                name: cell(row, name_idx),
                region: self.region.normalize(&cell(row, area_idx)),
                is_australian: self.residency.classify(&cell(row, residency_idx)),
                experience_years: self.duration.parse(&cell(row, experience_idx)),
                extra: extras
                    .iter()
                    .map(|(output, idx)| (output.clone(), cell(row, Some(*idx))))
                    .collect::<IndexMap<_, _>>(),
            })
            .collect();

        debug!(rows = records.len(), "assembled clean table");

        let extra_columns = extras.into_iter().map(|(output, _)| output).collect();
        AssemblyResult {
            table: CleanTable::new(name_idx.is_some(), extra_columns, records),
            dropped_columns,
            missing_columns,
        }
    }

    fn is_dropped(&self, header: &str) -> bool {
        let lower = header.to_lowercase();
        self.config
            .drop_patterns
            .iter()
            .any(|pattern| lower.contains(&pattern.to_lowercase()))
    }
}

fn cell(row: &[CellValue], idx: Option<usize>) -> CellValue {
    idx.and_then(|i| row.get(i).cloned()).unwrap_or_default()
}
