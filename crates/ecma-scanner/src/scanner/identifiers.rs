//! Identifiers, keywords and `\uHHHH` identifier escapes.

use super::Scanner;
use crate::char_codes::{is_valid_identifier_part, is_valid_identifier_start};
use crate::diagnostics::ErrorSink;
use crate::keywords::keywords_starting_with;
use crate::token::JsToken;

impl<S: ErrorSink> Scanner<S> {
    /// Identifier or keyword starting with a literal identifier-start
    /// character at the current position.
    pub(super) fn scan_identifier(&mut self) -> JsToken {
        let first = self.text[self.pos];
        self.pos += 1;
        self.token_value.push(first);
        let escaped = self.scan_identifier_rest();

        // Escaped spellings of keywords are plain identifiers.
        if !escaped && first.is_ascii_lowercase() {
            match self.match_keyword(first) {
                Some(token) if token.is_strict_mode_keyword() && !self.options.strict_mode => {}
                Some(token) => return token,
                None => {}
            }
        }
        JsToken::Identifier
    }

    /// Identifier that begins with a `\uHHHH` escape.
    pub(super) fn scan_escaped_identifier_start(&mut self) -> JsToken {
        match self.unicode_escape_at(self.pos) {
            Some(ch) if is_valid_identifier_start(ch) => {
                self.token_value.push(ch);
                self.pos += 6;
                self.scan_identifier_rest();
                JsToken::Identifier
            }
            _ => self.illegal_character(),
        }
    }

    /// Continue an identifier. Returns whether any escape was decoded.
    ///
    /// A backslash that does not introduce a valid identifier-part escape
    /// ends the identifier and is left for the next token.
    fn scan_identifier_rest(&mut self) -> bool {
        let mut escaped = false;
        loop {
            match self.peek() {
                Some(c) if is_valid_identifier_part(c) => {
                    self.token_value.push(c);
                    self.pos += 1;
                }
                Some('\\') => match self.unicode_escape_at(self.pos) {
                    Some(decoded) if is_valid_identifier_part(decoded) => {
                        self.token_value.push(decoded);
                        self.pos += 6;
                        escaped = true;
                    }
                    _ => break,
                },
                _ => break,
            }
        }
        escaped
    }

    /// Keyword for the identifier run in `token_value`, if it spells one in
    /// full.
    fn match_keyword(&self, first: char) -> Option<JsToken> {
        keywords_starting_with(first)
            .iter()
            .find(|(text, _)| *text == self.token_value)
            .map(|&(_, token)| token)
    }

    /// Decode `\uHHHH` at `at`.
    pub(super) fn unicode_escape_at(&self, at: usize) -> Option<char> {
        if self.char_at(at)? != '\\' || self.char_at(at + 1)? != 'u' {
            return None;
        }
        self.read_hex_digits(at + 2, 4).and_then(char::from_u32)
    }
}
