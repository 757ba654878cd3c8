//! Error types for loadplan

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// Truck capacity is zero or negative in either dimension
    #[error("Invalid truck configuration: {0}")]
    InvalidConfiguration(String),

    /// Negative quantity or negative per-unit volume/weight
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unknown truck type: {0}")]
    UnknownTruckType(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
