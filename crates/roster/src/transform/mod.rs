//! Assembly of the clean output table.

mod engine;
mod record;

pub use engine::{
    AssemblerConfig, AssemblyResult, DEFAULT_DROP_PATTERNS, DEFAULT_PASSTHROUGH_COLUMNS,
    TableAssembler,
};
pub use record::{
    AUSTRALIAN_FIELD, CleanRecord, CleanTable, EXPERIENCE_FIELD, NAME_FIELD, REGION_FIELD,
};
