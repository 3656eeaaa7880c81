/// Error types for dataset loading
use thiserror::Error;

/// Main error type for dataset loading operations
#[derive(Error, Debug)]
pub enum DataError {
    /// Failed to parse a JSON dataset
    #[error("Failed to parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a CSV dataset
    #[error("Failed to parse CSV dataset: {0}")]
    Csv(#[from] csv::Error),

    /// CSV header row lacks a required column
    #[error("CSV header is missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;
