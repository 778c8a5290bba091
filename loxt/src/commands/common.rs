//! Common types and utilities for loxt commands.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One literal per line
    #[default]
    Text,
    /// Kind name and literal per line
    Kinds,
    /// JSON array of `{ kind, literal }` objects
    Json,
}

// ============================================================================
// Source Input
// ============================================================================

/// Reads the source to scan as raw bytes.
///
/// An inline expression wins over a file; with neither, stdin is read.
/// Bytes are not validated here so the scanner can report bad encoding
/// with a line number.
pub fn read_source(expr: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(expr) = expr {
        return Ok(expr.as_bytes().to_vec());
    }

    match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading source file");
            Ok(std::fs::read(path)?)
        },
        None => {
            tracing::debug!("reading source from stdin");
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        },
    }
}
