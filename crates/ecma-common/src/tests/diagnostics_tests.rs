//! Tests for diagnostics.rs

use super::diagnostics::*;
use super::position::SourceLocation;

#[test]
fn test_default_categories() {
    assert_eq!(JsError::IllegalChar.category(), DiagnosticCategory::Error);
    assert_eq!(
        JsError::OctalLiteralsDeprecated.category(),
        DiagnosticCategory::Warning
    );
}

#[test]
fn test_codes_are_unique_and_reversible() {
    for error in JsError::ALL {
        assert_eq!(JsError::from_code(error.code()), Some(error));
    }
    assert_eq!(JsError::from_code(1), None);
}

#[test]
fn test_diagnostic_new() {
    let diag = Diagnostic::new(
        JsError::BadHexEscapeSequence,
        4,
        6,
        SourceLocation::new(4, 1, 5),
    );
    assert_eq!(diag.length(), 2);
    assert!(diag.is_error());
    assert_eq!(diag.code, JsError::BadHexEscapeSequence.code());
    assert_eq!(
        diag.to_string(),
        "(1:5) error JS1018: Bad hexadecimal escape sequence"
    );
}

#[test]
fn test_with_category_override() {
    let diag = Diagnostic::new(JsError::IllegalChar, 0, 1, SourceLocation::START)
        .with_category(DiagnosticCategory::Warning);
    assert!(!diag.is_error());
}

#[test]
fn test_diagnostic_serializes() {
    let diag = Diagnostic::new(JsError::UnterminatedString, 0, 3, SourceLocation::START);
    let json = serde_json::to_string(&diag).unwrap();
    assert!(json.contains("\"UnterminatedString\""));
    let back: Diagnostic = serde_json::from_str(&json).unwrap();
    assert_eq!(back, diag);
}
