//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};

/// Roster: support-worker survey cleaner
#[derive(Parser)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean data.csv into support_workers_clean.csv and .json
    Clean {
        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List candidates from support_workers_clean.csv
    Find {
        /// Only candidates in this region
        #[arg(short, long)]
        region: Option<String>,

        /// Citizen/PR status to require
        #[arg(short, long, default_value = "any")]
        australian: ResidencyChoice,

        /// Minimum years of experience
        #[arg(short, long, default_value = "0")]
        min_exp: f64,

        /// Name fragment to search for
        #[arg(short, long)]
        name: Option<String>,

        /// Page of results to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Citizen/PR requirement for `find`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResidencyChoice {
    #[default]
    Any,
    Yes,
    No,
}

impl ResidencyChoice {
    /// The filter value, `None` meaning either.
    pub fn as_filter(&self) -> Option<bool> {
        match self {
            ResidencyChoice::Any => None,
            ResidencyChoice::Yes => Some(true),
            ResidencyChoice::No => Some(false),
        }
    }
}

impl std::str::FromStr for ResidencyChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" | "all" => Ok(ResidencyChoice::Any),
            "yes" | "y" | "true" => Ok(ResidencyChoice::Yes),
            "no" | "n" | "false" => Ok(ResidencyChoice::No),
            _ => Err(format!("Unknown choice: {}. Use any, yes, or no.", s)),
        }
    }
}

impl std::fmt::Display for ResidencyChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResidencyChoice::Any => write!(f, "any"),
            ResidencyChoice::Yes => write!(f, "yes"),
            ResidencyChoice::No => write!(f, "no"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residency_choice_parse() {
        assert_eq!("Yes".parse::<ResidencyChoice>(), Ok(ResidencyChoice::Yes));
        assert_eq!("no".parse::<ResidencyChoice>(), Ok(ResidencyChoice::No));
        assert_eq!("ANY".parse::<ResidencyChoice>(), Ok(ResidencyChoice::Any));
        assert!("maybe".parse::<ResidencyChoice>().is_err());
    }

    #[test]
    fn test_find_args() {
        let cli = Cli::parse_from([
            "roster", "find", "--region", "Perth", "--australian", "yes", "--min-exp", "2.5",
        ]);
        match cli.command {
            Commands::Find {
                region,
                australian,
                min_exp,
                page,
                ..
            } => {
                assert_eq!(region.as_deref(), Some("Perth"));
                assert_eq!(australian.as_filter(), Some(true));
                assert_eq!(min_exp, 2.5);
                assert_eq!(page, 1);
            }
            Commands::Clean { .. } => panic!("expected find"),
        }
    }
}
