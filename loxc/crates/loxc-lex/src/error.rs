//! Error types for loxc-lex
//!
//! Scanning is fail-fast: the first error aborts the scan and is handed to
//! the caller, which decides how to report it.

use thiserror::Error;

/// Error produced while scanning source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character outside whitespace, comments, and known punctuation.
    ///
    /// The cursor has already moved past `literal` when this is returned.
    #[error("LoxSyntaxError: Unrecognized token: {literal} on line {line}")]
    UnrecognizedToken {
        /// The offending character.
        literal: char,
        /// Line the character was found on.
        line: u32,
    },

    /// A malformed UTF-8 sequence at byte `offset`. The cursor is left at
    /// `offset`.
    #[error("LoxSyntaxError: Invalid UTF-8 at byte {offset} on line {line}")]
    InvalidEncoding {
        /// Byte offset of the first malformed byte.
        offset: usize,
        /// Line the malformed bytes were found on.
        line: u32,
    },
}

impl ScanError {
    /// Returns the 1-based source line the error was raised on.
    pub fn line(&self) -> u32 {
        match self {
            ScanError::UnrecognizedToken { line, .. } | ScanError::InvalidEncoding { line, .. } => {
                *line
            },
        }
    }
}

/// Result type alias for scanning operations
pub type ScanResult<T> = std::result::Result<T, ScanError>;
