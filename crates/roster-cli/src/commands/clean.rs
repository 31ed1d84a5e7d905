//! Clean command - turn the survey export into the clean CSV and JSON.

use colored::Colorize;
use roster::{CleanReport, Cleaner};

pub fn run(json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let cleaner = Cleaner::new();

    if verbose && !json_output {
        eprintln!(
            "{} {}",
            "Cleaning".cyan().bold(),
            cleaner.config().input_path.display()
        );
    }

    let report = cleaner.run()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for path in &report.outputs {
        println!("Saved: {}", path.display());
    }
    print_summary(&report, verbose);

    Ok(())
}

fn print_summary(report: &CleanReport, verbose: bool) {
    let summary = &report.summary;

    println!();
    println!(
        "{} {} rows from {}",
        "Cleaned".green().bold(),
        summary.rows.to_string().white().bold(),
        report.source.file
    );
    println!("  {:<12} {}/{}", "name:", summary.names, summary.rows);
    println!("  {:<12} {}/{}", "region:", summary.regions, summary.rows);
    println!("  {:<12} {}/{}", "residency:", summary.residency, summary.rows);
    println!("  {:<12} {}/{}", "experience:", summary.experience, summary.rows);

    if !report.dropped_columns.is_empty() {
        println!(
            "  {:<12} {}",
            "dropped:",
            report.dropped_columns.join(", ").dimmed()
        );
    }

    for column in &report.missing_columns {
        println!(
            "{} column '{}' not found; its output is empty",
            "Warning:".yellow().bold(),
            column
        );
    }

    if verbose {
        println!();
        println!("{} {}", "Columns:".cyan(), report.columns.join(", "));
        println!("{} {}", "Source hash:".cyan(), report.source.hash.dimmed());
    }
}
