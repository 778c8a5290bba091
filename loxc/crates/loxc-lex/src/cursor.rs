//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while decoding source characters. Source text is held as raw bytes so that
//! malformed UTF-8 is reported instead of being silently treated as the end
//! of input. The cursor also tracks the 1-based line number for diagnostics.

use crate::error::{ScanError, ScanResult};

/// Result of decoding the character at the cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A well-formed character.
    Char(char),
    /// The cursor is at the end of the source.
    End,
    /// The bytes at the cursor are not a valid UTF-8 sequence.
    Invalid,
}

/// A cursor for traversing source code character by character.
///
/// The cursor only ever moves forward, and always sits on a character
/// boundary or at the end of the source.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor over bytes that are expected, but not known, to
    /// be UTF-8. Encoding is checked lazily as characters are decoded.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Decodes the character at the cursor without moving.
    ///
    /// Returns the decoded value and its byte width (0 unless it is a char).
    #[inline]
    fn decode(&self) -> (Decoded, usize) {
        let rest = &self.source[self.position..];
        let Some(&first) = rest.first() else {
            return (Decoded::End, 0);
        };

        // Fast path for ASCII (most common case)
        if first.is_ascii() {
            return (Decoded::Char(first as char), 1);
        }

        // A scalar value is at most four bytes wide.
        let window = &rest[..rest.len().min(4)];
        let valid = match std::str::from_utf8(window) {
            Ok(text) => Some(text),
            Err(e) => std::str::from_utf8(&window[..e.valid_up_to()]).ok(),
        };

        match valid.and_then(|text| text.chars().next()) {
            Some(c) => (Decoded::Char(c), c.len_utf8()),
            None => (Decoded::Invalid, 0),
        }
    }

    /// Decodes and consumes the character at the cursor.
    ///
    /// Consuming `'\n'` increments the line counter. On [`Decoded::End`] or
    /// [`Decoded::Invalid`] the cursor does not move.
    #[inline]
    pub fn advance(&mut self) -> Decoded {
        let (decoded, width) = self.decode();
        self.position += width;
        if decoded == Decoded::Char('\n') {
            self.line += 1;
        }
        decoded
    }

    /// Decodes the character at the cursor without consuming it.
    #[inline]
    pub fn peek_next(&self) -> Decoded {
        self.decode().0
    }

    /// Consumes the next character if it is `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek_next() == Decoded::Char(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters until the next one is `target` or decoding fails.
    ///
    /// `target` itself is left unconsumed.
    pub fn skip_to(&mut self, target: char) {
        while let Decoded::Char(c) = self.peek_next() {
            if c == target {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// Every consumed character was decoded successfully, so the slice is
    /// valid UTF-8 whenever `start` is a position this cursor has visited.
    pub fn slice_from(&self, start: usize) -> ScanResult<&'a str> {
        let bytes = &self.source[start..self.position];
        std::str::from_utf8(bytes).map_err(|e| ScanError::InvalidEncoding {
            offset: start + e.valid_up_to(),
            line: self.line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_over(source: &str) -> Cursor<'_> {
        Cursor::from_bytes(source.as_bytes())
    }

    #[test]
    fn test_new_cursor() {
        let cursor = cursor_over("(+)");
        assert_eq!(cursor.peek_next(), Decoded::Char('('));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = cursor_over("abc");
        assert_eq!(cursor.advance(), Decoded::Char('a'));
        assert_eq!(cursor.advance(), Decoded::Char('b'));
        assert_eq!(cursor.advance(), Decoded::Char('c'));
        assert_eq!(cursor.advance(), Decoded::End);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = cursor_over("αβ€😀");
        assert_eq!(cursor.advance(), Decoded::Char('α'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.advance(), Decoded::Char('β'));
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.advance(), Decoded::Char('€'));
        assert_eq!(cursor.position(), 7);
        assert_eq!(cursor.advance(), Decoded::Char('😀'));
        assert_eq!(cursor.position(), 11);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = cursor_over("ab");
        assert_eq!(cursor.peek_next(), Decoded::Char('a'));
        assert_eq!(cursor.peek_next(), Decoded::Char('a'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_invalid_sequence_does_not_advance() {
        let mut cursor = Cursor::from_bytes(b"+\xFF+");
        assert_eq!(cursor.advance(), Decoded::Char('+'));
        assert_eq!(cursor.advance(), Decoded::Invalid);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.peek_next(), Decoded::Invalid);
    }

    #[test]
    fn test_truncated_sequence_is_invalid() {
        // First two bytes of a three-byte sequence.
        let cursor = Cursor::from_bytes(b"\xE2\x82");
        assert_eq!(cursor.peek_next(), Decoded::Invalid);
    }

    #[test]
    fn test_char_followed_by_invalid_bytes() {
        let mut cursor = Cursor::from_bytes(b"\xC3\xA9\xFF");
        assert_eq!(cursor.advance(), Decoded::Char('é'));
        assert_eq!(cursor.advance(), Decoded::Invalid);
    }

    #[test]
    fn test_line_tracking() {
        let mut cursor = cursor_over("a\nb\n");
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_match_char() {
        let mut cursor = cursor_over("=>");
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char('>'));
        assert!(!cursor.match_char('>'));
    }

    #[test]
    fn test_skip_to_stops_before_target() {
        let mut cursor = cursor_over("abc\ndef");
        cursor.skip_to('\n');
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.line(), 1);
    }

    #[test]
    fn test_skip_to_runs_to_end() {
        let mut cursor = cursor_over("no newline here");
        cursor.skip_to('\n');
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_skip_to_stops_at_invalid() {
        let mut cursor = Cursor::from_bytes(b"ab\x80cd\n");
        cursor.skip_to('\n');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.peek_next(), Decoded::Invalid);
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = cursor_over("<=>");
        let start = cursor.position();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.slice_from(start), Ok("<="));
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = cursor_over("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek_next(), Decoded::End);
        assert_eq!(cursor.advance(), Decoded::End);
        assert_eq!(cursor.position(), 0);
    }
}
