//! Property-based tests for the normalizers and table assembly.
//!
//! These verify:
//! 1. **No panics**: any answer text is handled
//! 2. **Determinism**: the same input always gives the same output
//! 3. **Invariants**: row counts, non-negative durations, canonical regions
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p roster --test property_tests
//! ```

use proptest::prelude::*;

use roster::normalize::DEFAULT_CITIES;
use roster::{
    AssemblerConfig, DataTable, DurationParser, Parser, RegionNormalizer, ResidencyClassifier,
    TableAssembler,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Free-text survey answers.
fn answer() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .,'/-]{0,40}",
        "[0-9]{1,3}(\\.[0-9]{1,2})? ?(years?|yrs?|y|months?|mos?|m)",
        "(more than|about|over) [0-9]{1,2} ?(years|months)?",
        ".{0,30}",
    ]
}

/// Answers limited to ASCII, where title-casing is stable.
fn ascii_answer() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,'/-]{0,40}"
}

fn survey_rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(answer(), 4), 0..25)
}

fn ascii_survey_rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(ascii_answer(), 4), 0..25)
}

fn survey(rows: Vec<Vec<String>>) -> DataTable {
    DataTable::from_text_rows(
        ["name", "area", "australian", "exp as support worker"],
        rows,
    )
}

// =============================================================================
// Normalizers
// =============================================================================

proptest! {
    #[test]
    fn duration_never_negative(text in answer()) {
        if let Some(years) = DurationParser::new().parse_str(&text) {
            prop_assert!(years >= 0.0);
            prop_assert!(years.is_finite());
        }
    }

    #[test]
    fn duration_deterministic(text in answer()) {
        let parser = DurationParser::new();
        prop_assert_eq!(parser.parse_str(&text), parser.parse_str(&text));
    }

    #[test]
    fn residency_deterministic(text in answer()) {
        let classifier = ResidencyClassifier::new();
        prop_assert_eq!(classifier.classify_str(&text), classifier.classify_str(&text));
    }

    #[test]
    fn region_idempotent(text in ascii_answer()) {
        let normalizer = RegionNormalizer::new();
        let once = normalizer.normalize_str(&text);
        let twice = normalizer.normalize_str(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn region_named_city_wins(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        idx in 0..DEFAULT_CITIES.len(),
    ) {
        let city = DEFAULT_CITIES[idx];
        let text = format!("{}{}{}", prefix, city.to_uppercase(), suffix);
        let region = RegionNormalizer::new().normalize_str(&text);
        prop_assert!(DEFAULT_CITIES.contains(&region.as_str()));
    }
}

// =============================================================================
// Assembly
// =============================================================================

proptest! {
    #[test]
    fn assembly_preserves_row_count(rows in survey_rows()) {
        let table = survey(rows);
        let result = TableAssembler::new().assemble(&table);
        prop_assert_eq!(result.table.len(), table.row_count());
    }

    #[test]
    fn assembly_deterministic(rows in survey_rows()) {
        let table = survey(rows);
        let assembler = TableAssembler::new();
        prop_assert_eq!(assembler.assemble(&table).table, assembler.assemble(&table).table);
    }

    #[test]
    fn reassembly_keeps_regions(rows in ascii_survey_rows()) {
        let first = TableAssembler::new().assemble(&survey(rows)).table;
        let config = AssemblerConfig {
            area_column: "region".to_string(),
            ..AssemblerConfig::default()
        };
        let second = TableAssembler::with_config(config).assemble(&first.to_data_table()).table;

        for (a, b) in first.records().iter().zip(second.records()) {
            prop_assert_eq!(&a.region, &b.region);
        }
    }

    #[test]
    fn parser_never_panics(text in ".{0,200}") {
        let _ = Parser::new().parse_str(&text);
    }
}
