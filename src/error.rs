use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Missing column in dataset: {0}")]
    MissingColumn(String),

    #[error("Invalid number in column '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}
