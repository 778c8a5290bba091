//! loxc-lex - Lexical Analyzer for the Lox Programming Language
//!
//! This crate converts raw UTF-8 source text into a sequence of classified
//! tokens that a parser can consume one at a time.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{Scanner, Token, TokenKind};
//!
//! let mut scanner = Scanner::new("!=");
//! assert_eq!(scanner.next_token(), Ok(Token::new(TokenKind::BangEqual, "!=")));
//! assert!(scanner.next_token().unwrap().is_end());
//!
//! // Or scan everything at once; the end-of-input sentinel is not included.
//! let tokens = Scanner::new("(+) // sum").scan_all().unwrap();
//! assert_eq!(tokens.len(), 3);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - Main scanner implementation
//! - `cursor` - Character cursor for source traversal (internal)
//! - [`error`] - Scan error types
//!
//! The cursor is an implementation detail of the scanner and is not exported:
//!
//! ```compile_fail
//! use loxc_lex::cursor::Cursor;
//! ```
//!
//! # Token Categories
//!
//! - **Punctuation**: `(`, `)`, `{`, `}`, `,`, `.`, `-`, `+`, `;`, `/`, `*`
//! - **Comparison and assignment**: `!`, `!=`, `=`, `==`, `>`, `>=`, `<`, `<=`
//! - **EndOfInput**: end of source marker
//!
//! Whitespace (space, tab, newline) and `//` line comments
//! never produce tokens. Any other character is a [`ScanError`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub(crate) mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use error::{ScanError, ScanResult};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Scans `source` completely, without the end-of-input sentinel.
///
/// Shorthand for `Scanner::new(source).scan_all()`.
pub fn tokenize(source: &str) -> ScanResult<Vec<Token<'_>>> {
    Scanner::new(source).scan_all()
}
