//! The ECMAScript scanner.
//!
//! [`Scanner`] converts source text into a sequence of classified tokens.
//! It is driven by the caller one token at a time through
//! [`Scanner::scan_next_token`], which takes a hint saying whether a `/` at
//! the current position may begin a regular expression literal.
//!
//! The scanner never aborts: malformed input is reported to the configured
//! [`ErrorSink`] and a best-effort token is returned so that the consumer can
//! keep going. Every character of the input is covered by exactly one
//! token, trivia included, so concatenating the text of every span
//! reproduces the source.
//!
//! Scanning can be suspended after any complete token. The only state that
//! must survive a suspension is captured in [`ResumableState`], which the
//! caller hands back to [`Scanner::initialize`] together with the next
//! chunk of source.

mod identifiers;
mod numbers;
mod punctuation;
mod regex;
mod strings;
mod trivia;

use crate::char_codes::{
    is_ascii_identifier_start, is_blank_space, is_decimal_digit, is_hex_digit, is_line_terminator,
    is_valid_identifier_start,
};
use crate::diagnostics::{DiagnosticCollection, ErrorSink};
use crate::span::TokenSpan;
use crate::token::JsToken;
use ecma_common::limits::{CHARS_PER_TOKEN_ESTIMATE, MAX_TOKEN_PREALLOC};
use ecma_common::{IndexResolver, JsError, SourceLocation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Scanner configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanOptions {
    /// Classify the strict-mode-only reserved words as keywords.
    pub strict_mode: bool,
    /// Return only significant tokens; whitespace, line terminators and
    /// comments are consumed silently.
    pub skip_trivia: bool,
}

/// The state that must be carried from one scan to the next for the second
/// to continue as if its source were contiguous with the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumableState {
    /// The previous chunk ended inside an unterminated `/* ... */` comment.
    pub in_multiline_comment: bool,
}

pub struct Scanner<S = DiagnosticCollection> {
    /// The chunk being scanned.
    text: Vec<char>,
    /// Absolute offset of `text[0]`.
    base: u32,
    /// Current position in `text`.
    pos: usize,
    /// Start of the current token in `text`.
    token_start: usize,
    token: JsToken,
    /// Identifier name, decoded string value, regex pattern or numeric text.
    token_value: String,
    number_value: f64,
    regex_flags: Option<String>,
    /// A line terminator was consumed while scanning the current token.
    saw_line_terminator: bool,
    preceding_line_break: bool,
    last_significant: Option<JsToken>,
    state: ResumableState,
    options: ScanOptions,
    resolver: Arc<IndexResolver>,
    sink: S,
    /// Set once the iterator has yielded the end-of-file token.
    finished: bool,
}

impl Scanner<DiagnosticCollection> {
    /// Scan `source` with default options, collecting diagnostics.
    pub fn new(source: &str) -> Self {
        Scanner::with_sink(source, ScanOptions::default(), DiagnosticCollection::new())
    }

    pub fn with_options(source: &str, options: ScanOptions) -> Self {
        Scanner::with_sink(source, options, DiagnosticCollection::new())
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.sink
    }
}

impl<S: ErrorSink> Scanner<S> {
    pub fn with_sink(source: &str, options: ScanOptions, sink: S) -> Self {
        let mut scanner = Scanner {
            text: Vec::new(),
            base: 0,
            pos: 0,
            token_start: 0,
            token: JsToken::None,
            token_value: String::new(),
            number_value: 0.0,
            regex_flags: None,
            saw_line_terminator: false,
            preceding_line_break: false,
            last_significant: None,
            state: ResumableState::default(),
            options,
            resolver: Arc::new(IndexResolver::default()),
            sink,
            finished: false,
        };
        scanner.initialize(source, ResumableState::default(), SourceLocation::START);
        scanner
    }

    /// Reset the scanner onto a new chunk of source.
    ///
    /// `prior_state` is the [`ResumableState`] captured when the previous
    /// chunk stopped, and `initial_location` is where this chunk starts in
    /// the whole document. All token offsets produced afterwards are
    /// absolute, and line/column numbers continue from `initial_location`.
    pub fn initialize(
        &mut self,
        source: &str,
        prior_state: ResumableState,
        initial_location: SourceLocation,
    ) {
        self.text = source.chars().collect();
        self.base = initial_location.index;
        self.pos = 0;
        self.token_start = 0;
        self.token = JsToken::None;
        self.token_value.clear();
        self.number_value = 0.0;
        self.regex_flags = None;
        self.saw_line_terminator = false;
        self.preceding_line_break = false;
        self.last_significant = None;
        self.state = prior_state;
        self.resolver = Arc::new(IndexResolver::new(initial_location));
        self.finished = false;
    }

    // =========================================================================
    // Public API
    // =========================================================================

    /// Scan the next token.
    ///
    /// `regex_hint` says whether a `/` here may start a regular expression
    /// (true when no operand has been completed yet, e.g. after an operator
    /// or `(`), as opposed to a division. Even when hinted, a `/` that does
    /// not close on the same line falls back to division.
    pub fn scan_next_token(&mut self, regex_hint: bool) -> TokenSpan {
        if !self.token.is_trivia() {
            self.preceding_line_break = false;
        }
        loop {
            let token = self.scan_token(regex_hint);
            if self.saw_line_terminator
                && matches!(token, JsToken::EndOfLine | JsToken::MultipleLineComment)
            {
                self.preceding_line_break = true;
            }
            if !(self.options.skip_trivia && token.is_trivia()) {
                break;
            }
        }
        if !self.token.is_trivia() {
            self.last_significant = Some(self.token);
        }
        self.current_span()
    }

    /// Scan the next token, deciding the regex hint from the previous
    /// significant token.
    pub fn next_token(&mut self) -> TokenSpan {
        let hint = JsToken::regex_allowed_after(self.last_significant);
        self.scan_next_token(hint)
    }

    /// Scan until end of input. The returned spans end with the end-of-file
    /// token.
    pub fn scan_all(&mut self) -> Vec<TokenSpan> {
        let estimate = (self.text.len() / CHARS_PER_TOKEN_ESTIMATE).min(MAX_TOKEN_PREALLOC);
        let mut spans = Vec::with_capacity(estimate);
        loop {
            let span = self.next_token();
            let done = span.token == JsToken::EndOfFile;
            spans.push(span);
            if done {
                return spans;
            }
        }
    }

    /// State to hand to [`Scanner::initialize`] when resuming with more
    /// source.
    pub fn current_state(&self) -> ResumableState {
        self.state
    }

    /// Kind of the last scanned token.
    pub fn token(&self) -> JsToken {
        self.token
    }

    /// Identifier name (escapes decoded), decoded string value, regular
    /// expression pattern, or raw numeric text of the last token.
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Numeric value of the last numeric literal.
    pub fn number_value(&self) -> f64 {
        self.number_value
    }

    /// Flags of the last regular expression literal.
    pub fn regex_flags(&self) -> Option<&str> {
        self.regex_flags.as_deref()
    }

    /// Whether a line terminator separates the last significant token from
    /// the one before it.
    pub fn has_preceding_line_break(&self) -> bool {
        self.preceding_line_break
    }

    /// Absolute start offset of the last token.
    pub fn token_start(&self) -> u32 {
        self.absolute(self.token_start)
    }

    /// Absolute end offset of the last token.
    pub fn token_end(&self) -> u32 {
        self.absolute(self.pos)
    }

    /// Raw source text of the last token.
    pub fn token_text(&self) -> String {
        self.text[self.token_start..self.pos].iter().collect()
    }

    /// Raw source text covered by `span`, clipped to the current chunk.
    pub fn source_text(&self, span: &TokenSpan) -> String {
        let start = (span.start.saturating_sub(self.base) as usize).min(self.text.len());
        let end = (span.end.saturating_sub(self.base) as usize).clamp(start, self.text.len());
        self.text[start..end].iter().collect()
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn resolver(&self) -> &Arc<IndexResolver> {
        &self.resolver
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    pub fn set_strict_mode(&mut self, strict: bool) {
        self.options.strict_mode = strict;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    fn scan_token(&mut self, regex_hint: bool) -> JsToken {
        self.token_start = self.pos;
        self.token_value.clear();
        self.number_value = 0.0;
        self.regex_flags = None;
        self.saw_line_terminator = false;

        // An unterminated comment stays open across end of input; the state
        // is kept for the next chunk.
        let Some(ch) = self.peek() else {
            self.token = JsToken::EndOfFile;
            return self.token;
        };

        if self.state.in_multiline_comment {
            debug!(
                offset = self.absolute(self.pos),
                "resuming inside multi-line comment"
            );
            self.token = self.scan_multiline_comment_body();
            return self.token;
        }

        self.token = match ch {
            // A trailing NUL terminates the input.
            '\0' if self.pos + 1 == self.text.len() => {
                self.pos += 1;
                JsToken::EndOfFile
            }
            c if is_blank_space(c) => self.scan_whitespace(),
            c if is_line_terminator(c) => self.scan_line_terminators(),
            '"' | '\'' => self.scan_string(ch),
            '0'..='9' => self.scan_number(),
            '.' if self.peek_at(1).is_some_and(is_decimal_digit) => self.scan_number(),
            '/' => self.scan_slash(regex_hint),
            '\\' => self.scan_escaped_identifier_start(),
            c if is_ascii_identifier_start(c) => self.scan_identifier(),
            c if !c.is_ascii() && is_valid_identifier_start(c) => self.scan_identifier(),
            _ => self.scan_punctuation(ch),
        };
        self.token
    }

    /// Consume one character and report it as illegal.
    fn illegal_character(&mut self) -> JsToken {
        self.pos += 1;
        self.report(JsError::IllegalChar, self.token_start, self.pos, JsToken::Error);
        JsToken::Error
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[inline]
    fn absolute(&self, pos: usize) -> u32 {
        self.base + pos as u32
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.text.get(self.pos + ahead).copied()
    }

    #[inline]
    fn char_at(&self, index: usize) -> Option<char> {
        self.text.get(index).copied()
    }

    /// Consume `expected` if it is the next character.
    #[inline]
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Value of exactly `count` hex digits starting at `at`.
    fn read_hex_digits(&self, at: usize, count: usize) -> Option<u32> {
        let mut value = 0u32;
        for i in 0..count {
            let ch = self.char_at(at + i).filter(|&c| is_hex_digit(c))?;
            value = value * 16 + ch.to_digit(16)?;
        }
        Some(value)
    }

    /// Consume the line terminator at the current position (`\r\n` as one)
    /// and record the start of the next line.
    fn consume_line_terminator(&mut self) {
        if self.peek() == Some('\r') && self.peek_at(1) == Some('\n') {
            self.pos += 2;
        } else {
            self.pos += 1;
        }
        self.record_line_start();
    }

    /// Record that a line starts at the current position.
    fn record_line_start(&mut self) {
        self.resolver.add_line_start(self.absolute(self.pos));
        self.saw_line_terminator = true;
    }

    fn current_span(&self) -> TokenSpan {
        TokenSpan::new(
            self.absolute(self.token_start),
            self.absolute(self.pos),
            self.token,
            Arc::clone(&self.resolver),
        )
    }

    fn report(&mut self, error: JsError, start: usize, end: usize, token: JsToken) {
        let span = TokenSpan::new(
            self.absolute(start),
            self.absolute(end),
            token,
            Arc::clone(&self.resolver),
        );
        self.sink.report(error, &span);
    }
}

impl<S: ErrorSink> Iterator for Scanner<S> {
    type Item = TokenSpan;

    /// Yields tokens (with automatic regex hints) through end-of-file.
    fn next(&mut self) -> Option<TokenSpan> {
        if self.finished {
            return None;
        }
        let span = self.next_token();
        if span.token == JsToken::EndOfFile {
            self.finished = true;
        }
        Some(span)
    }
}
