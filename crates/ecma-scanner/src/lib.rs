//! ECMAScript scanner/tokenizer.
//!
//! This crate provides the lexical analysis phase:
//! - `JsToken` - Token kinds
//! - `Scanner` - Resumable tokenizer with regex hints
//! - `TokenSpan` - Half-open token ranges with lazy line/column resolution
//! - `char_codes` - Character classification utilities
//! - `operators` - Binary operator precedence table

pub mod char_codes;
pub mod diagnostics;
pub mod keywords;
pub mod operators;
pub mod scanner;
pub mod span;
pub mod token;

pub use diagnostics::{DiagnosticCollection, ErrorSink, IgnoreErrors};
pub use keywords::{is_keyword, text_to_keyword};
pub use operators::{Associativity, OperatorInfo, OperatorPrecedence, precedence_of};
pub use scanner::{ResumableState, ScanOptions, Scanner};
pub use span::TokenSpan;
pub use token::JsToken;

#[cfg(test)]
#[path = "tests/char_codes_tests.rs"]
mod char_codes_tests;
#[cfg(test)]
#[path = "tests/keywords_tests.rs"]
mod keywords_tests;
#[cfg(test)]
#[path = "tests/operators_tests.rs"]
mod operators_tests;
#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;
#[cfg(test)]
#[path = "tests/span_tests.rs"]
mod span_tests;
