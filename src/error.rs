//! Error types for the jobscout batch run.
//!
//! Only run-fatal conditions surface as `AppError`: a missing required
//! column, an unreadable/unwritable table or checkpoint, or a bad
//! configuration value. Per-site transport and parsing failures are not
//! errors; they degrade to "no candidate" inside the discovery pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The input table lacks a column the run cannot proceed without.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row carries more fields than the header; writing it back
    /// would silently drop cells.
    #[error("Row {row} has {found} fields but the header has {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// An environment variable held a value that could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
