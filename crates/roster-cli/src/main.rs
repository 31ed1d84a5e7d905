//! Roster CLI - support-worker survey cleaner.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Clean { json } => commands::clean::run(json, cli.verbose),

        Commands::Find {
            region,
            australian,
            min_exp,
            name,
            page,
            json,
        } => commands::find::run(region, australian, min_exp, name, page, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
