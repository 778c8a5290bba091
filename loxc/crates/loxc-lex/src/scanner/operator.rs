//! Operator and punctuation scanning.
//!
//! This module classifies the first non-whitespace character of a token.
//! The character itself has already been consumed by the caller.

use crate::error::ScanResult;
use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Classifies a consumed character that is not `/`.
    ///
    /// Handles single-character punctuation and the `!`, `=`, `>`, `<`
    /// families, or fails with `UnrecognizedToken`.
    pub(crate) fn lex_operator(&mut self, c: char) -> ScanResult<TokenKind> {
        if let Some(kind) = TokenKind::from_punctuation(c) {
            return Ok(kind);
        }

        match c {
            '!' => Ok(self.lex_with_equal(TokenKind::BangEqual, TokenKind::Bang)),
            '=' => Ok(self.lex_with_equal(TokenKind::EqualEqual, TokenKind::Equal)),
            '>' => Ok(self.lex_with_equal(TokenKind::GreaterEqual, TokenKind::Greater)),
            '<' => Ok(self.lex_with_equal(TokenKind::LessEqual, TokenKind::Less)),
            c => Err(self.unrecognized(c)),
        }
    }

    /// Lexes a one-character operator that may be followed by `=`.
    ///
    /// Handles: `!`/`!=`, `=`/`==`, `>`/`>=`, `<`/`<=`
    fn lex_with_equal(&mut self, with_equal: TokenKind, alone: TokenKind) -> TokenKind {
        if self.cursor.match_char('=') {
            with_equal
        } else {
            alone
        }
    }

    /// Lexes slash or the start of a line comment.
    ///
    /// Handles: `/`, `//`. Returns `None` once a comment has been skipped.
    pub(crate) fn lex_slash(&mut self) -> Option<TokenKind> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            None
        } else {
            Some(TokenKind::Slash)
        }
    }
}
