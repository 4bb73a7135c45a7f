use anyhow::{Context, Result};
use colored::Colorize;
use ecma_common::{Diagnostic, DiagnosticCategory};
use ecma_scanner::TokenSpan;
use serde::Serialize;

/// One scanned token, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub kind: String,
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
    pub text: String,
}

impl TokenRecord {
    pub fn new(span: &TokenSpan, text: String) -> Self {
        let location = span.start_location();
        TokenRecord {
            kind: format!("{:?}", span.token),
            start: span.start,
            end: span.end,
            line: location.line,
            column: location.column,
            text,
        }
    }
}

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// `line:col Kind "text"`, with the text escaped so that newlines and
    /// quotes stay on one line.
    pub fn format_token(&self, token: &TokenRecord) -> String {
        format!(
            "{}:{} {} {:?}",
            token.line, token.column, token.kind, token.text
        )
    }

    pub fn render_tokens(&self, tokens: &[TokenRecord]) -> String {
        tokens
            .iter()
            .map(|token| self.format_token(token))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_json(&self, tokens: &[TokenRecord]) -> Result<String> {
        serde_json::to_string_pretty(tokens).context("failed to serialize tokens")
    }

    pub fn render_diagnostics(&self, file: &str, diagnostics: &[Diagnostic]) -> String {
        diagnostics
            .iter()
            .map(|diagnostic| self.format_diagnostic(file, diagnostic))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `file:line:col - category JS1014: message`
    pub fn format_diagnostic(&self, file: &str, diagnostic: &Diagnostic) -> String {
        format!(
            "{}:{}:{} - {} {}: {}",
            file,
            diagnostic.location.line,
            diagnostic.location.column,
            self.format_category(diagnostic.category),
            self.format_code(diagnostic.code),
            diagnostic.message_text
        )
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.to_string();
        if !self.color {
            return label;
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        let text = format!("JS{code}");
        if self.color {
            text.bright_black().to_string()
        } else {
            text
        }
    }
}
