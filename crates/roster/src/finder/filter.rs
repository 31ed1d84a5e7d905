//! Candidate filtering and pagination.

use serde::Serialize;

use super::candidate::Candidate;

/// Candidates shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Criteria a candidate must all meet to be listed.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    /// Exact region, or any region when `None`.
    pub region: Option<String>,
    /// Required citizen/PR status, or any when `None`.
    pub australian: Option<bool>,
    /// Minimum years of experience.
    pub min_experience: f64,
    /// Case-insensitive name fragment.
    pub query: Option<String>,
}

impl CandidateFilter {
    /// A filter that keeps everyone.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_australian(mut self, australian: bool) -> Self {
        self.australian = Some(australian);
        self
    }

    pub fn with_min_experience(mut self, years: f64) -> Self {
        self.min_experience = years;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns true if the candidate meets every criterion.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if let Some(ref region) = self.region {
            if &candidate.region != region {
                return false;
            }
        }
        if let Some(australian) = self.australian {
            if candidate.is_australian != australian {
                return false;
            }
        }
        if candidate.experience_years < self.min_experience {
            return false;
        }
        if let Some(ref query) = self.query {
            let query = query.trim().to_lowercase();
            if !query.is_empty() && !candidate.name_lc.contains(&query) {
                return false;
            }
        }
        true
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a, T> {
    /// 1-based page number actually shown.
    pub page: usize,
    /// Total pages; never less than one.
    pub total_pages: usize,
    /// Total items across all pages.
    pub total: usize,
    pub items: &'a [T],
}

/// Slice out a 1-based page. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);

    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        page,
        total_pages,
        total: items.len(),
        items: &items[start..end],
    }
}
