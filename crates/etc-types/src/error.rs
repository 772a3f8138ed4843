//! Error types for the ETC dashboard

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Requested page number is below the first page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Page {page} is out of range (pages start at 1)")]
pub struct OutOfRangeError {
    pub page: usize,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Network response was not ok")]
    EmptyResponse,

    #[error("{0}")]
    OutOfRange(#[from] OutOfRangeError),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("CSV export error: {0}")]
    Csv(String),
}

pub type Result<T> = std::result::Result<T, Error>;
