// Export modules for library usage
pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod edit;
pub mod formatting;
pub mod io;
pub mod pipeline;
pub mod session;

// Re-export commonly used types
pub use crate::aggregate::{summarize, DashboardSummary};
pub use crate::core::dataset::{columns, CellValue, Dataset};
pub use crate::core::errors::{Error, Result};
pub use crate::edit::{apply_edits, CellEdit, EditOutcome, EditSet};
pub use crate::pipeline::classify::{classify, RiskLevel, RiskThresholds};
pub use crate::pipeline::score::burnout_score;
pub use crate::pipeline::PipelineReport;
pub use crate::session::SessionStore;

pub use crate::io::output::{create_writer, AnalysisReport, OutputFormat, OutputWriter};
