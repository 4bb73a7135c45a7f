//! ECMAScript scanning and syntax-tree building blocks.
//!
//! The work is split across the workspace crates, re-exported here:
//! - [`common`] - Source locations, diagnostics and limits
//! - [`scanner`] - The tokenizer, token spans and operator metadata
//! - [`ast`] - The node arena, tree walking and scope classification
//!
//! This crate adds the pieces an application needs around them: tracing
//! setup and the `ecma-tokens` command-line front end.

pub use ecma_ast as ast;
pub use ecma_common as common;
pub use ecma_scanner as scanner;

pub mod cli;
pub mod tracing_config;

pub use cli::config::{ScanConfig, load_config};
