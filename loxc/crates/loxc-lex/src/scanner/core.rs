//! Core scanner implementation.
//!
//! This module contains the main Scanner struct and its core methods.

use tracing::{debug, trace};

use crate::cursor::{Cursor, Decoded};
use crate::error::{ScanError, ScanResult};
use crate::token::Token;

/// Scanner for Lox source text.
///
/// The scanner turns source text into tokens one at a time. It owns its
/// cursor exclusively; independent scanners over the same source share
/// nothing but the read-only text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Set once iteration has yielded its last item.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner positioned at offset 0, line 1.
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Creates a scanner over raw bytes.
    ///
    /// The bytes are not validated up front; a malformed sequence is
    /// reported as [`ScanError::InvalidEncoding`] when the scanner reaches it.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::from_bytes(source),
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace and `//` comments are skipped first. At the end of the
    /// source this returns the [`crate::TokenKind::EndOfInput`] sentinel, and keeps
    /// returning it on further calls.
    ///
    /// # Errors
    ///
    /// - [`ScanError::UnrecognizedToken`] for a character that starts no
    ///   token. The offending character has been consumed.
    /// - [`ScanError::InvalidEncoding`] for malformed UTF-8. The cursor stays
    ///   on the bad bytes.
    pub fn next_token(&mut self) -> ScanResult<Token<'a>> {
        loop {
            let (decoded, start) = self.skip_whitespace();

            let kind = match decoded {
                Decoded::End => {
                    trace!(line = self.cursor.line(), "reached end of input");
                    return Ok(Token::end_of_input());
                },
                Decoded::Invalid => return Err(self.invalid_encoding()),
                Decoded::Char('/') => match self.lex_slash() {
                    Some(kind) => kind,
                    // A comment yields no token of its own.
                    None => continue,
                },
                Decoded::Char(c) => self.lex_operator(c)?,
            };

            let token = Token::new(kind, self.cursor.slice_from(start)?);
            trace!(
                kind = %token.kind,
                literal = token.literal,
                line = self.cursor.line(),
                "scanned token"
            );
            return Ok(token);
        }
    }

    /// Scans the remaining source into a vector.
    ///
    /// The end-of-input sentinel is not included. On error nothing scanned
    /// so far is returned.
    pub fn scan_all(&mut self) -> ScanResult<Vec<Token<'a>>> {
        self.collect()
    }

    /// Builds the error for an unrecognized character.
    pub(crate) fn unrecognized(&self, literal: char) -> ScanError {
        let line = self.cursor.line();
        debug!(%literal, line, "unrecognized token");
        ScanError::UnrecognizedToken { literal, line }
    }

    fn invalid_encoding(&self) -> ScanError {
        let offset = self.cursor.position();
        let line = self.cursor.line();
        debug!(offset, line, "invalid UTF-8 in source");
        ScanError::InvalidEncoding { offset, line }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once every byte of the source has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScanResult<Token<'a>>;

    /// Yields tokens until end of input, or a single error. Never yields the
    /// end-of-input sentinel, and returns `None` forever afterwards.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_end() => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
