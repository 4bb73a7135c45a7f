//! String literals and escape sequences.

use super::Scanner;
use crate::char_codes::{is_decimal_digit, is_line_terminator, is_octal_digit};
use crate::diagnostics::ErrorSink;
use crate::token::JsToken;
use ecma_common::JsError;

impl<S: ErrorSink> Scanner<S> {
    /// String literal delimited by `delimiter`. The decoded value is left in
    /// `token_value`.
    ///
    /// A raw line terminator or end of input before the closing delimiter is
    /// an unterminated string. The terminator is not consumed, so the next
    /// token starts on it.
    pub(super) fn scan_string(&mut self, delimiter: char) -> JsToken {
        self.pos += 1;
        loop {
            let Some(ch) = self.peek() else {
                self.report(
                    JsError::UnterminatedString,
                    self.token_start,
                    self.pos,
                    JsToken::StringLiteral,
                );
                break;
            };
            if ch == delimiter {
                self.pos += 1;
                break;
            }
            if is_line_terminator(ch) {
                self.report(
                    JsError::UnterminatedString,
                    self.token_start,
                    self.pos,
                    JsToken::StringLiteral,
                );
                break;
            }
            if ch == '\\' {
                self.scan_escape_sequence();
            } else {
                self.token_value.push(ch);
                self.pos += 1;
            }
        }
        JsToken::StringLiteral
    }

    /// Escape sequence starting at the backslash under the cursor.
    fn scan_escape_sequence(&mut self) {
        let escape_start = self.pos;
        self.pos += 1;
        let Some(ch) = self.peek() else {
            return;
        };
        self.pos += 1;
        match ch {
            'b' => self.token_value.push('\u{0008}'),
            't' => self.token_value.push('\t'),
            'n' => self.token_value.push('\n'),
            'v' => self.token_value.push('\u{000B}'),
            'f' => self.token_value.push('\u{000C}'),
            'r' => self.token_value.push('\r'),
            'x' => self.scan_hex_escape(escape_start, 'x', 2),
            'u' => self.scan_hex_escape(escape_start, 'u', 4),
            '0'..='7' => self.scan_octal_escape(escape_start, ch),
            // Line continuation: the terminator is consumed and contributes
            // nothing to the value.
            '\r' => {
                self.eat('\n');
                self.record_line_start();
            }
            '\n' | '\u{2028}' | '\u{2029}' => self.record_line_start(),
            // `\"`, `\'`, `\\` and every unknown escape stand for themselves.
            other => self.token_value.push(other),
        }
    }

    /// `\xHH` or `\uHHHH`; the cursor is just past the `x`/`u`.
    ///
    /// Too few hex digits keep the original text (`\x` followed by whatever
    /// comes next) and report the escape.
    fn scan_hex_escape(&mut self, escape_start: usize, marker: char, digits: usize) {
        let Some(value) = self.read_hex_digits(self.pos, digits) else {
            self.token_value.push('\\');
            self.token_value.push(marker);
            self.report(
                JsError::BadHexEscapeSequence,
                escape_start,
                self.pos,
                JsToken::StringLiteral,
            );
            return;
        };
        self.pos += digits;

        // A surrogate pair spelled as two `\u` escapes is one character.
        if (0xD800..0xDC00).contains(&value) {
            if let Some(low) = self.low_surrogate_escape_at(self.pos) {
                let combined = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
                if let Some(decoded) = char::from_u32(combined) {
                    self.token_value.push(decoded);
                    self.pos += 6;
                    return;
                }
            }
        }
        self.token_value
            .push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    fn low_surrogate_escape_at(&self, at: usize) -> Option<u32> {
        if self.char_at(at)? != '\\' || self.char_at(at + 1)? != 'u' {
            return None;
        }
        self.read_hex_digits(at + 2, 4)
            .filter(|value| (0xDC00..0xE000).contains(value))
    }

    /// Legacy octal escape: up to three octal digits when the first is 0-3,
    /// up to two otherwise. `\0` not followed by a digit is the NUL escape
    /// and is not deprecated.
    fn scan_octal_escape(&mut self, escape_start: usize, first: char) {
        let mut value = first as u32 - '0' as u32;
        let max_digits = if first <= '3' { 3 } else { 2 };
        let mut digits = 1;
        while digits < max_digits {
            match self.peek() {
                Some(c) if is_octal_digit(c) => {
                    value = value * 8 + (c as u32 - '0' as u32);
                    self.pos += 1;
                    digits += 1;
                }
                _ => break,
            }
        }

        let is_nul_escape = first == '0' && digits == 1 && !self.peek().is_some_and(is_decimal_digit);
        if !is_nul_escape {
            self.report(
                JsError::OctalLiteralsDeprecated,
                escape_start,
                self.pos,
                JsToken::StringLiteral,
            );
        }
        // At most 0o377.
        self.token_value.push(char::from(value as u8));
    }
}
