//! Regular expression literals.

use super::Scanner;
use crate::char_codes::{is_line_terminator, is_valid_identifier_part};
use crate::diagnostics::ErrorSink;
use crate::token::JsToken;
use tracing::trace;

impl<S: ErrorSink> Scanner<S> {
    /// Try to scan `/pattern/flags` at the `/` under the cursor.
    ///
    /// A `/` inside a `[...]` class does not close the pattern, and a
    /// backslash escapes whatever follows it. If the pattern hits a line
    /// terminator or end of input before its closing `/`, nothing is
    /// consumed and `None` is returned so the caller can scan a division
    /// operator instead.
    pub(super) fn try_scan_regex(&mut self) -> Option<JsToken> {
        let mut pos = self.pos + 1;
        let mut in_class = false;
        let mut pattern = String::new();

        loop {
            let Some(ch) = self.char_at(pos).filter(|&c| !is_line_terminator(c)) else {
                trace!(
                    offset = self.absolute(self.pos),
                    "unterminated regular expression, rescanning as divide"
                );
                return None;
            };
            pos += 1;
            match ch {
                '\\' => {
                    let escaped = self.char_at(pos).filter(|&c| !is_line_terminator(c))?;
                    pattern.push(ch);
                    pattern.push(escaped);
                    pos += 1;
                }
                '/' if !in_class => break,
                '[' => {
                    in_class = true;
                    pattern.push(ch);
                }
                ']' => {
                    in_class = false;
                    pattern.push(ch);
                }
                _ => pattern.push(ch),
            }
        }
        self.pos = pos;

        let mut flags = String::new();
        while let Some(c) = self.peek().filter(|&c| is_valid_identifier_part(c)) {
            flags.push(c);
            self.pos += 1;
        }

        self.token_value = pattern;
        self.regex_flags = Some(flags);
        Some(JsToken::RegularExpression)
    }
}
