//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// HeatGuard CLI
#[derive(Debug, Parser)]
#[command(name = "heatguard-cli")]
#[command(author, version, about = "Heat health assistant", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "HEATGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up weather, health tips and nearby places for a city
    Search {
        /// City name, e.g. "Chennai"
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Search repeatedly; each new city cancels the search in progress
    Interactive,

    /// Check a running server
    Status {
        /// Server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,
    },
}

impl Commands {
    /// City argument joined back into one name
    pub fn city(&self) -> Option<String> {
        match self {
            Self::Search { city } => Some(city.join(" ")),
            _ => None,
        }
    }
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
