//! CLI command implementations for burnmap operations.
//!
//! Each submodule handles one command: configuration, validation, and
//! execution. All pipeline semantics live in the library; commands only
//! wire ingestion, the session store, the pipeline, and the writers
//! together.

pub mod analyze;
pub mod edit;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use edit::{handle_edit, EditConfig};
pub use init::init_config;

use crate::cli;
use crate::config::BurnmapConfig;
use crate::io::output::OutputFormat;

/// Resolve the effective output format: flag, then config, then terminal.
pub(crate) fn resolve_format(
    flag: Option<cli::OutputFormat>,
    settings: &BurnmapConfig,
) -> OutputFormat {
    if let Some(format) = flag {
        return format.into();
    }
    settings
        .output
        .default_format
        .as_deref()
        .and_then(OutputFormat::parse)
        .unwrap_or(OutputFormat::Terminal)
}
