//! Error types for the newsdesk command-line front end.

use std::path::PathBuf;

use newsdesk_engine::EngineError;
use thiserror::Error;

/// Main error type for the newsdesk library.
#[derive(Debug, Error)]
pub enum NewsdeskError {
    /// An input CSV could not be opened.
    #[error("Could not open file {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading failed in a way that prevents continuing with the source.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Query refused or failed in the engine.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for newsdesk operations.
pub type Result<T> = std::result::Result<T, NewsdeskError>;
