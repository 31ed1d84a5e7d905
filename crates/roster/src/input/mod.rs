//! Input parsing and data source handling.

mod cell;
mod parser;
mod source;

pub use cell::CellValue;
pub use parser::{DEFAULT_NA_VALUES, Parser, ParserConfig};
pub use source::{DataTable, SourceMetadata};
