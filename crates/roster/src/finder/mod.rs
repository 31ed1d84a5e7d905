//! Worker roster built from a clean table.
//!
//! The roster is what participants browse: candidates listed under a known
//! region, most experienced first, narrowed by a [`CandidateFilter`].

mod candidate;
mod filter;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::input::{DataTable, Parser};

pub use candidate::{Candidate, LISTED_REGIONS, listed_region};
pub use filter::{CandidateFilter, DEFAULT_PAGE_SIZE, Page, paginate};

/// Listed candidates, most experienced first.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// Build a roster from a clean table.
    pub fn from_table(table: &DataTable) -> Self {
        let mut candidates = Candidate::from_table(table);
        // Stable, so equal experience keeps file order
        candidates.sort_by(|a, b| b.experience_years.total_cmp(&a.experience_years));

        debug!(
            rows = table.row_count(),
            listed = candidates.len(),
            "built roster"
        );
        Self { candidates }
    }

    /// Load a clean CSV written by the cleaner.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let (table, _) = Parser::new().parse_file(path)?;
        Ok(Self::from_table(&table))
    }

    /// All listed candidates.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Candidates matching the filter, keeping roster order.
    pub fn filter(&self, filter: &CandidateFilter) -> Vec<&Candidate> {
        self.candidates.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Distinct regions with at least one candidate, sorted.
    pub fn regions(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .map(|c| c.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTable {
        DataTable::from_text_rows(
            ["name", "region", "is_australian", "experience_years"],
            vec![
                vec!["Ann", "Perth", "True", "1.0"],
                vec!["Bo", "Sydney", "False", "4.0"],
                vec!["Cy", "Unknown Place", "True", "9.0"],
                vec!["Di", "Perth", "", "4.0"],
            ],
        )
    }

    #[test]
    fn test_sorted_by_experience() {
        let roster = Roster::from_table(&table());
        let names: Vec<&str> = roster.candidates().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bo", "Di", "Ann"]);
    }

    #[test]
    fn test_regions() {
        let roster = Roster::from_table(&table());
        assert_eq!(roster.regions(), vec!["Perth", "Sydney"]);
    }

    #[test]
    fn test_filter() {
        let roster = Roster::from_table(&table());
        let filter = CandidateFilter::new()
            .with_region("Perth")
            .with_min_experience(2.0);
        let hits = roster.filter(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Di");
        assert_eq!(hits[0].id, "4");
    }
}
