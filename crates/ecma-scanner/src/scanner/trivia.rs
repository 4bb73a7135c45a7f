//! Whitespace, line terminators and comments.

use super::Scanner;
use crate::char_codes::{is_blank_space, is_line_terminator};
use crate::diagnostics::ErrorSink;
use crate::token::JsToken;
use ecma_common::JsError;

impl<S: ErrorSink> Scanner<S> {
    /// A run of blank space.
    pub(super) fn scan_whitespace(&mut self) -> JsToken {
        while self.peek().is_some_and(is_blank_space) {
            self.pos += 1;
        }
        JsToken::WhiteSpace
    }

    /// A run of line terminators. Each one (`\r\n` counting once) starts a
    /// new line.
    pub(super) fn scan_line_terminators(&mut self) -> JsToken {
        while self.peek().is_some_and(is_line_terminator) {
            self.consume_line_terminator();
        }
        JsToken::EndOfLine
    }

    /// `/` starts a comment, a regular expression (only when hinted) or a
    /// division operator.
    pub(super) fn scan_slash(&mut self, regex_hint: bool) -> JsToken {
        match self.peek_at(1) {
            Some('/') => self.scan_single_line_comment(),
            Some('*') => {
                self.pos += 2;
                self.state.in_multiline_comment = true;
                self.scan_multiline_comment_body()
            }
            _ => {
                if regex_hint {
                    if let Some(token) = self.try_scan_regex() {
                        return token;
                    }
                }
                self.scan_punctuation('/')
            }
        }
    }

    /// `//` up to, but not including, the next line terminator.
    fn scan_single_line_comment(&mut self) -> JsToken {
        self.pos += 2;
        while self.peek().is_some_and(|c| !is_line_terminator(c)) {
            self.pos += 1;
        }
        JsToken::SingleLineComment
    }

    /// The inside of a `/* ... */` comment, from the current position
    /// through the closing `*/`.
    ///
    /// Called right after `/*`, or at the start of a chunk when the previous
    /// chunk ended inside a comment. Reaching end of input leaves
    /// `in_multiline_comment` set so the next chunk picks up here.
    pub(super) fn scan_multiline_comment_body(&mut self) -> JsToken {
        loop {
            match self.peek() {
                None => {
                    self.report(
                        JsError::UnterminatedComment,
                        self.token_start,
                        self.pos,
                        JsToken::MultipleLineComment,
                    );
                    return JsToken::MultipleLineComment;
                }
                Some('*') if self.peek_at(1) == Some('/') => {
                    self.pos += 2;
                    self.state.in_multiline_comment = false;
                    return JsToken::MultipleLineComment;
                }
                Some(c) if is_line_terminator(c) => self.consume_line_terminator(),
                Some(_) => self.pos += 1,
            }
        }
    }
}
