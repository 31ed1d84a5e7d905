//! Field normalizers for survey answers.
//!
//! Each normalizer is a pure, total function over a single [`CellValue`]:
//! text that matches no rule, and any non-text cell, become `None` rather
//! than an error.
//!
//! [`CellValue`]: crate::input::CellValue

mod duration;
mod region;
mod residency;

pub use duration::DurationParser;
pub use region::{DEFAULT_CITIES, RegionNormalizer, title_case};
pub use residency::{
    DEFAULT_NON_RESIDENT_KEYWORDS, DEFAULT_RESIDENT_KEYWORDS, ResidencyClassifier,
};
