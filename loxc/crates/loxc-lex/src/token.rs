//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact slice of source text it
//! was scanned from. Tokens are plain values: they borrow the source but hold
//! no reference back to the scanner that produced them.

use std::fmt;

/// The closed set of lexical categories produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character operators
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    /// End of input sentinel. Never part of the language's alphabet.
    EndOfInput,
}

impl TokenKind {
    /// Returns the upper-snake name used in diagnostics and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::EndOfInput => "END_OF_INPUT",
        }
    }

    /// Returns the fixed source text every token of this kind is scanned from.
    ///
    /// [`TokenKind::EndOfInput`] has no text and returns the empty string.
    pub fn lexeme(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::EndOfInput => "",
        }
    }

    /// Maps a single punctuation character to its kind.
    ///
    /// Characters that may start a two-character operator (`!`, `=`, `>`,
    /// `<`) and the comment-introducing `/` are not handled here.
    pub fn from_punctuation(c: char) -> Option<TokenKind> {
        match c {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            ',' => Some(TokenKind::Comma),
            '.' => Some(TokenKind::Dot),
            '-' => Some(TokenKind::Minus),
            '+' => Some(TokenKind::Plus),
            ';' => Some(TokenKind::Semicolon),
            '*' => Some(TokenKind::Star),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme borrowed from the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// The token's category.
    pub kind: TokenKind,
    /// The exact source text consumed to produce this token.
    pub literal: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token. No validation is done; the scanner guarantees that
    /// `literal` matches the shape of `kind`.
    pub fn new(kind: TokenKind, literal: &'a str) -> Self {
        Self { kind, literal }
    }

    /// The end-of-input sentinel.
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    /// Returns true for the end-of-input sentinel.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_equality_is_by_value() {
        let source = String::from("==");
        let a = Token::new(TokenKind::EqualEqual, &source);
        let b = Token::new(TokenKind::EqualEqual, "==");
        assert_eq!(a, b);
        assert_ne!(a, Token::new(TokenKind::Equal, "="));
    }

    #[test]
    fn test_token_display_prints_literal() {
        assert_eq!(Token::new(TokenKind::LessEqual, "<=").to_string(), "<=");
        assert_eq!(Token::end_of_input().to_string(), "");
    }

    #[test]
    fn test_kind_display_uses_name() {
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenKind::EndOfInput.to_string(), "END_OF_INPUT");
    }

    #[test]
    fn test_punctuation_lookup_matches_lexeme() {
        for c in "(){},.-+;*".chars() {
            let kind = TokenKind::from_punctuation(c).unwrap();
            assert_eq!(kind.lexeme(), c.to_string());
        }
        assert_eq!(TokenKind::from_punctuation('/'), None);
        assert_eq!(TokenKind::from_punctuation('='), None);
        assert_eq!(TokenKind::from_punctuation('@'), None);
    }

    #[test]
    fn test_is_end() {
        assert!(Token::end_of_input().is_end());
        assert!(!Token::new(TokenKind::Plus, "+").is_end());
    }
}
