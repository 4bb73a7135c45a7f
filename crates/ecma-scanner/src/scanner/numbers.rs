//! Numeric literals.

use super::Scanner;
use crate::char_codes::{
    is_decimal_digit, is_octal_digit, is_valid_identifier_part, is_valid_identifier_start,
};
use crate::diagnostics::ErrorSink;
use crate::token::JsToken;
use ecma_common::JsError;

impl<S: ErrorSink> Scanner<S> {
    /// Numeric literal starting with a digit, or with `.` followed by one.
    pub(super) fn scan_number(&mut self) -> JsToken {
        if self.peek() == Some('0') {
            match self.peek_at(1) {
                Some('x' | 'X') => return self.scan_hex_number(),
                Some(c) if is_octal_digit(c) => {
                    if let Some(token) = self.try_scan_legacy_octal() {
                        return token;
                    }
                }
                _ => {}
            }
        }
        self.scan_decimal_number()
    }

    fn scan_hex_number(&mut self) -> JsToken {
        self.pos += 2;
        let digits_start = self.pos;
        let mut value = 0.0f64;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(16)) {
            value = value * 16.0 + f64::from(d);
            self.pos += 1;
        }
        self.number_value = value;
        if self.pos == digits_start {
            // `0x` with no digits: the `x` is an identifier character stuck
            // to `0`.
            self.pos = self.token_start + 1;
            self.number_value = 0.0;
        }
        self.finish_number()
    }

    /// `0` followed by octal digits. Returns `None` (consuming nothing) when
    /// the digit run contains 8 or 9, which makes it a decimal literal.
    fn try_scan_legacy_octal(&mut self) -> Option<JsToken> {
        let mut end = self.pos + 1;
        while self.char_at(end).is_some_and(is_decimal_digit) {
            end += 1;
        }
        let digits = &self.text[self.pos + 1..end];
        if !digits.iter().all(|&c| is_octal_digit(c)) {
            return None;
        }
        self.number_value = digits
            .iter()
            .fold(0.0, |acc, &c| acc * 8.0 + f64::from(c as u32 - '0' as u32));
        self.pos = end;
        self.report(
            JsError::OctalLiteralsDeprecated,
            self.token_start,
            self.pos,
            JsToken::NumericLiteral,
        );
        Some(self.finish_number())
    }

    /// Digits, an optional fraction and an optional exponent whose marker
    /// may be followed by a single sign.
    fn scan_decimal_number(&mut self) -> JsToken {
        self.consume_decimal_digits();
        if self.peek() == Some('.') {
            self.pos += 1;
            self.consume_decimal_digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let digits_at = if matches!(self.peek_at(1), Some('+' | '-')) {
                2
            } else {
                1
            };
            // Without digits the marker stays unconsumed and is flagged as a
            // bad ending below.
            if self.peek_at(digits_at).is_some_and(is_decimal_digit) {
                self.pos += digits_at;
                self.consume_decimal_digits();
            }
        }
        let literal: String = self.text[self.token_start..self.pos].iter().collect();
        self.number_value = literal.parse::<f64>().unwrap_or(f64::NAN);
        self.finish_number()
    }

    fn consume_decimal_digits(&mut self) {
        while self.peek().is_some_and(is_decimal_digit) {
            self.pos += 1;
        }
    }

    /// A numeric literal may not run straight into a digit or an identifier
    /// character. If it does, the whole run is consumed and reported, and the
    /// value scanned so far is kept.
    fn finish_number(&mut self) -> JsToken {
        if self
            .peek()
            .is_some_and(|c| is_decimal_digit(c) || is_valid_identifier_start(c))
        {
            while self.peek().is_some_and(is_valid_identifier_part) {
                self.pos += 1;
            }
            self.report(
                JsError::BadNumericLiteral,
                self.token_start,
                self.pos,
                JsToken::NumericLiteral,
            );
        }
        self.token_value = self.text[self.token_start..self.pos].iter().collect();
        JsToken::NumericLiteral
    }
}
