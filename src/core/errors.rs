//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for burnmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// No dataset has been ingested yet; callers should redirect to
    /// ingestion rather than running the pipeline.
    #[error("no dataset loaded; ingest a survey CSV first")]
    NoDataset,

    /// Dataset construction / CSV ingestion errors
    #[error("ingestion error: {message}")]
    Ingestion {
        message: String,
        path: Option<PathBuf>,
    },

    /// Malformed edit input (bad `--set` syntax, not out-of-bounds targets)
    #[error("edit error: {0}")]
    Edit(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create an ingestion error with path context
    pub fn ingestion(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Ingestion {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
