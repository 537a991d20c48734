//! Error types for sq-core

use thiserror::Error;

/// Core error type for sqlinity
#[derive(Error, Debug)]
pub enum SqError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Failed to parse configuration file
    #[error("[C002] Failed to parse config {path}: {source}")]
    ConfigParseError {
        path: String,
        source: serde_json::Error,
    },

    /// M001: Migration name cannot be turned into a safe file name
    #[error("[M001] Invalid migration name '{name}': {reason}")]
    InvalidMigrationName { name: String, reason: String },

    /// IO01: IO error with file path context (listing or reading)
    #[error("[IO01] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// IO02: Failed to write a file
    #[error("[IO02] Failed to write '{path}': {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for SqError
pub type SqResult<T> = Result<T, SqError>;
