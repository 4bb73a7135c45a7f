//! Common types and utilities for the ecma scanner and AST.
//!
//! This crate provides foundational types used across all ecma crates:
//! - Position types for source locations (`SourceLocation`, `IndexResolver`)
//! - The scanner error taxonomy and resolved diagnostics
//! - Centralized limits and thresholds

// Position types for line/column source locations
pub mod position;
pub use position::{IndexResolver, SourceLocation};

// Error taxonomy and diagnostic records
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, JsError};

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod position_tests;
#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
