//! Serialization of clean tables.

mod writer;

pub use writer::{ExportFormat, Exporter, write_csv, write_json};
