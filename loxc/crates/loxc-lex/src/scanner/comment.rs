//! Whitespace and comment skipping.

use tracing::trace;

use crate::cursor::Decoded;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Consumes whitespace and returns the first other decode result along
    /// with the byte offset it started at.
    ///
    /// Whitespace is space, tab, and newline; the cursor
    /// counts the newlines. `End` and `Invalid` stop the loop like any other
    /// non-whitespace result.
    pub(crate) fn skip_whitespace(&mut self) -> (Decoded, usize) {
        loop {
            let start = self.cursor.position();
            match self.cursor.advance() {
                Decoded::Char(' ' | '\t' | '\n') => {},
                decoded => return (decoded, start),
            }
        }
    }

    /// Skips the body of a line comment whose `//` has been consumed.
    ///
    /// The terminating newline is left for `skip_whitespace` to count.
    pub(crate) fn skip_line_comment(&mut self) {
        let start = self.cursor.position();
        self.cursor.skip_to('\n');
        trace!(
            line = self.cursor.line(),
            bytes = self.cursor.position() - start,
            "skipped comment"
        );
    }
}
