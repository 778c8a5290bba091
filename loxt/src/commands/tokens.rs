//! Tokens command implementation.
//!
//! Scans a source and prints its tokens. Scanning is fail-fast: if the
//! scanner reports an error nothing is written to the output.

use std::io::Write;
use std::path::PathBuf;

use loxc_lex::{Scanner, Token};
use serde::Serialize;

use crate::commands::common::{read_source, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source file to scan.
    pub file: Option<PathBuf>,
    /// Inline source text, used instead of `file`.
    pub expr: Option<String>,
    /// Output format, overriding the configured one.
    pub format: Option<OutputFormat>,
}

/// Serialized form of a token in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    literal: &'a str,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind.name(),
            literal: token.literal,
        }
    }
}

/// Run the tokens command, writing the dump to `out`.
///
/// Returns the number of tokens written.
pub fn run_tokens(args: TokensArgs, config: &Config, out: &mut impl Write) -> Result<usize> {
    let source = read_source(args.expr.as_deref(), args.file.as_deref())?;
    let format = args.format.unwrap_or(config.tokens.format);

    let tokens = Scanner::from_bytes(&source).scan_all()?;
    tracing::debug!(count = tokens.len(), ?format, "scanned source");

    write_tokens(&tokens, format, out)?;
    Ok(tokens.len())
}

/// Render tokens in the requested format.
fn write_tokens(tokens: &[Token<'_>], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Kinds => {
            for token in tokens {
                writeln!(out, "{} {}", token.kind, token)?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
