//! Check command implementation.
//!
//! Scans a source without printing its tokens, reporting only whether it
//! scanned cleanly.

use std::io::Write;
use std::path::PathBuf;

use loxc_lex::Scanner;

use crate::commands::common::read_source;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source file to scan.
    pub file: Option<PathBuf>,
    /// Inline source text, used instead of `file`.
    pub expr: Option<String>,
}

/// Run the check command. Returns the number of tokens scanned.
pub fn run_check(args: CheckArgs, out: &mut impl Write) -> Result<usize> {
    let source = read_source(args.expr.as_deref(), args.file.as_deref())?;

    let mut count = 0;
    for token in Scanner::from_bytes(&source) {
        token?;
        count += 1;
    }

    writeln!(out, "ok: {} tokens", count)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoxtError;
    use loxc_lex::ScanError;

    #[test]
    fn test_check_counts_tokens() {
        let args = CheckArgs {
            expr: Some("(){} // four\n".to_string()),
            ..CheckArgs::default()
        };
        let mut out = Vec::new();
        assert_eq!(run_check(args, &mut out).unwrap(), 4);
        assert_eq!(String::from_utf8(out).unwrap(), "ok: 4 tokens\n");
    }

    #[test]
    fn test_check_reports_first_error() {
        let args = CheckArgs {
            expr: Some("@ #".to_string()),
            ..CheckArgs::default()
        };
        let mut out = Vec::new();
        let result = run_check(args, &mut out);
        assert!(matches!(
            result,
            Err(LoxtError::Scan(ScanError::UnrecognizedToken { literal: '@', line: 1 }))
        ));
        assert!(out.is_empty());
    }
}
