//! Roster: cleans support-worker survey exports into an analysis-ready table.
//!
//! A survey export is loaded into a [`DataTable`], housekeeping columns are
//! dropped, and three free-text answers are normalized per row:
//!
//! - **Region**: the canonical Australian city named in the answer
//! - **Residency**: whether the respondent is a citizen or permanent resident
//! - **Experience**: years of support-work experience
//!
//! Answers that cannot be read become absent values; they never fail the run.
//! The clean table is written as CSV and as JSON records.
//!
//! # Example
//!
//! ```no_run
//! use roster::Cleaner;
//!
//! let report = Cleaner::new().run().unwrap();
//!
//! println!("Rows: {}", report.summary.rows);
//! println!("Regions resolved: {}", report.summary.regions);
//! ```

pub mod error;
pub mod export;
pub mod finder;
pub mod input;
pub mod normalize;
pub mod transform;

mod cleaner;

pub use crate::cleaner::{
    CleanReport, CleanSummary, Cleaner, CleanerConfig, DEFAULT_CSV_PATH, DEFAULT_INPUT_PATH,
    DEFAULT_JSON_PATH,
};
pub use error::{Result, RosterError};
pub use export::{ExportFormat, Exporter};
pub use finder::{Candidate, CandidateFilter, Roster};
pub use input::{CellValue, DataTable, Parser, ParserConfig, SourceMetadata};
pub use normalize::{DurationParser, RegionNormalizer, ResidencyClassifier};
pub use transform::{AssemblerConfig, AssemblyResult, CleanRecord, CleanTable, TableAssembler};
