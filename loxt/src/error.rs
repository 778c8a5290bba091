//! Error handling module for the loxt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use loxc_lex::ScanError;
use thiserror::Error;

/// Main error type for the loxt CLI application.
#[derive(Error, Debug)]
pub enum LoxtError {
    /// Error when configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the source could not be scanned.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LoxtError.
pub type Result<T> = std::result::Result<T, LoxtError>;
