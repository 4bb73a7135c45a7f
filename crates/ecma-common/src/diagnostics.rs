//! Scanner error taxonomy and resolved diagnostic records.

use crate::position::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        })
    }
}

/// Every problem the scanner can detect.
///
/// None of these stop scanning. The severity returned by [`JsError::category`]
/// is only a default; the sink that receives a report decides how to surface it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JsError {
    /// A character that starts no token.
    IllegalChar,
    /// A string literal cut off by a raw line terminator or end of input.
    UnterminatedString,
    /// End of input inside a `/* ... */` comment.
    UnterminatedComment,
    /// A numeric literal immediately followed by a digit or identifier character.
    BadNumericLiteral,
    /// `\x` or `\u` without the required number of hex digits.
    BadHexEscapeSequence,
    /// Legacy octal numeric literal or octal string escape.
    OctalLiteralsDeprecated,
}

impl JsError {
    pub const ALL: [JsError; 6] = [
        JsError::IllegalChar,
        JsError::UnterminatedString,
        JsError::UnterminatedComment,
        JsError::BadNumericLiteral,
        JsError::BadHexEscapeSequence,
        JsError::OctalLiteralsDeprecated,
    ];

    /// Stable numeric code.
    pub fn code(self) -> u32 {
        match self {
            JsError::IllegalChar => 1014,
            JsError::UnterminatedString => 1015,
            JsError::UnterminatedComment => 1016,
            JsError::BadNumericLiteral => 1017,
            JsError::BadHexEscapeSequence => 1018,
            JsError::OctalLiteralsDeprecated => 1019,
        }
    }

    /// Default severity.
    pub fn category(self) -> DiagnosticCategory {
        match self {
            JsError::OctalLiteralsDeprecated => DiagnosticCategory::Warning,
            _ => DiagnosticCategory::Error,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            JsError::IllegalChar => "Invalid character",
            JsError::UnterminatedString => "Unterminated string constant",
            JsError::UnterminatedComment => "Unterminated comment",
            JsError::BadNumericLiteral => "Invalid numeric literal",
            JsError::BadHexEscapeSequence => "Bad hexadecimal escape sequence",
            JsError::OctalLiteralsDeprecated => "Octal literals and escapes are deprecated",
        }
    }

    pub fn from_code(code: u32) -> Option<JsError> {
        JsError::ALL.iter().copied().find(|e| e.code() == code)
    }
}

impl fmt::Display for JsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A reported error with its location resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub error: JsError,
    pub category: DiagnosticCategory,
    pub code: u32,
    /// Absolute start offset.
    pub start: u32,
    /// Absolute end offset (exclusive).
    pub end: u32,
    /// Resolved location of `start`.
    pub location: SourceLocation,
    pub message_text: String,
}

impl Diagnostic {
    pub fn new(error: JsError, start: u32, end: u32, location: SourceLocation) -> Self {
        Self {
            error,
            category: error.category(),
            code: error.code(),
            start,
            end,
            location,
            message_text: error.message().to_string(),
        }
    }

    /// Override the default severity.
    pub fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }

    pub fn length(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {} JS{}: {}",
            self.location, self.category, self.code, self.message_text
        )
    }
}
