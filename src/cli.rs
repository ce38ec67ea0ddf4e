use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::io::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Markdown => output::OutputFormat::Markdown,
            OutputFormat::Terminal => output::OutputFormat::Terminal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "burnmap")]
#[command(about = "Burnout risk analytics for wellness survey data", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a survey CSV and report burnout metrics
    Analyze {
        /// Path to the survey CSV
        path: PathBuf,

        /// Output format (defaults to config, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the first N records in the table
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Apply cell edits to a survey CSV and recompute everything
    Edit {
        /// Path to the survey CSV
        path: PathBuf,

        /// Cell edit as COLUMN_ROW=VALUE, e.g. --set stress_level_0=9
        #[arg(long = "set", value_name = "COLUMN_ROW=VALUE")]
        set: Vec<String>,

        /// Write the updated dataset back out as CSV
        #[arg(long)]
        save: Option<PathBuf>,

        /// Output format (defaults to config, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the first N records in the table
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
