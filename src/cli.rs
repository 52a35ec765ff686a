//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "footprint-calc")]
#[command(version)]
#[command(about = "CO2 footprint estimation with green energy comparison and AI analysis")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Gemini model override
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the CO2 footprint for transportation inputs
    Calculate {
        /// Number of cars
        #[arg(long, default_value = "0")]
        cars: u64,

        /// Number of passengers
        #[arg(long, default_value = "0")]
        passengers: u64,

        /// Number of containers
        #[arg(long, default_value = "0")]
        containers: u64,

        /// Solar energy share (%)
        #[arg(long, default_value = "0")]
        solar: f64,

        /// Wind energy share (%)
        #[arg(long, default_value = "0")]
        wind: f64,

        /// Hydro energy share (%)
        #[arg(long, default_value = "0")]
        hydro: f64,

        /// Render the grouped bar chart after the table
        #[arg(long)]
        chart: bool,

        /// Save the calculation to a JSON file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Calculate, then discuss the results with the AI analyst
    Chat {
        /// Number of cars
        #[arg(long, default_value = "0")]
        cars: u64,

        /// Number of passengers
        #[arg(long, default_value = "0")]
        passengers: u64,

        /// Number of containers
        #[arg(long, default_value = "0")]
        containers: u64,

        /// Solar energy share (%)
        #[arg(long, default_value = "0")]
        solar: f64,

        /// Wind energy share (%)
        #[arg(long, default_value = "0")]
        wind: f64,

        /// Hydro energy share (%)
        #[arg(long, default_value = "0")]
        hydro: f64,

        /// Save the conversation transcript to a JSON file on exit
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Export a saved calculation to CSV
    Export {
        /// Path to a JSON file written by `calculate --output`
        calculation: PathBuf,

        /// Output CSV file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set chat model
        #[arg(long)]
        set_model: Option<String>,

        /// Set the environment variable the API key is read from
        #[arg(long)]
        set_api_key_env: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set chat request timeout in seconds
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
