//! Error types for the Newsdesk engine

use thiserror::Error;

/// Main error type for engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A year-based query was attempted while the store is not in chronological order
    #[error("Articles are not sorted; sort them before searching by year")]
    Unsorted,
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
