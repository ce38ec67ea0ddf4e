use anyhow::Result;
use burnmap::cli::{Cli, Commands};
use burnmap::commands::{analyze::AnalyzeConfig, edit::EditConfig};
use burnmap::formatting::FormattingConfig;
use clap::Parser;
use std::path::PathBuf;

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            top,
            plain,
        } => {
            let config = build_analyze_config(path, format, output, top, plain);
            burnmap::commands::analyze::handle_analyze(config)
        }
        Commands::Edit {
            path,
            set,
            save,
            format,
            output,
            top,
            plain,
        } => {
            let config = build_edit_config(path, set, save, format, output, top, plain);
            burnmap::commands::edit::handle_edit(config)
        }
        Commands::Init { force } => burnmap::commands::init::init_config(force),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

// Pure function to build analyze configuration
fn build_analyze_config(
    path: PathBuf,
    format: Option<burnmap::cli::OutputFormat>,
    output: Option<PathBuf>,
    top: Option<usize>,
    plain: bool,
) -> AnalyzeConfig {
    AnalyzeConfig {
        path,
        format,
        output,
        top,
        formatting: create_formatting_config(plain),
    }
}

// Pure function to build edit configuration
fn build_edit_config(
    path: PathBuf,
    assignments: Vec<String>,
    save: Option<PathBuf>,
    format: Option<burnmap::cli::OutputFormat>,
    output: Option<PathBuf>,
    top: Option<usize>,
    plain: bool,
) -> EditConfig {
    EditConfig {
        path,
        assignments,
        save,
        format,
        output,
        top,
        formatting: create_formatting_config(plain),
    }
}
