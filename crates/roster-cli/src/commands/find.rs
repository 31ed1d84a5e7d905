//! Find command - browse the clean roster.

use colored::Colorize;
use tracing::debug;

use roster::finder::{DEFAULT_PAGE_SIZE, listed_region, paginate};
use roster::{Candidate, CandidateFilter, DEFAULT_CSV_PATH, Roster};

use crate::cli::ResidencyChoice;

pub fn run(
    region: Option<String>,
    australian: ResidencyChoice,
    min_exp: f64,
    name: Option<String>,
    page: usize,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !std::path::Path::new(DEFAULT_CSV_PATH).exists() {
        return Err(format!(
            "Clean file not found: {}\nRun 'roster clean' first.",
            DEFAULT_CSV_PATH
        )
        .into());
    }

    let roster = Roster::load(DEFAULT_CSV_PATH)?;

    let mut filter = CandidateFilter::new().with_min_experience(min_exp.max(0.0));
    if let Some(region) = region {
        // Accept "perth" or "WA" for Perth
        filter = filter.with_region(listed_region(&region).unwrap_or(region));
    }
    if let Some(australian) = australian.as_filter() {
        filter = filter.with_australian(australian);
    }
    if let Some(name) = name {
        filter = filter.with_query(name);
    }

    let hits = roster.filter(&filter);
    debug!(listed = roster.len(), matched = hits.len(), ?filter, "filtered roster");
    let page = paginate(&hits, page, DEFAULT_PAGE_SIZE);

    if json_output {
        let out = serde_json::json!({
            "page": page.page,
            "total_pages": page.total_pages,
            "total": page.total,
            "regions": roster.regions(),
            "items": page.items,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {} of {} listed (page {}/{})",
        "Candidates:".cyan().bold(),
        page.total.to_string().white().bold(),
        roster.len(),
        page.page,
        page.total_pages
    );
    println!();

    if page.items.is_empty() {
        println!("  {}", "No candidates match.".dimmed());
        return Ok(());
    }

    for candidate in page.items {
        print_candidate(candidate);
    }

    Ok(())
}

fn print_candidate(candidate: &Candidate) {
    let status = if candidate.is_australian {
        "Citizen/PR".green()
    } else {
        "Visa".yellow()
    };

    println!(
        "  {:>4}  {}  {}  {}  {} yrs",
        candidate.id.dimmed(),
        candidate.name.white().bold(),
        candidate.region.cyan(),
        status,
        candidate.experience_years
    );

    if !candidate.previous_role.is_empty() {
        let mut line = candidate.previous_role.clone();
        if !candidate.previous_work_place.is_empty() {
            line.push_str(" at ");
            line.push_str(&candidate.previous_work_place);
        }
        println!("        {}", line.dimmed());
    }
}
