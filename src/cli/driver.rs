use anyhow::{Context, Result};
use ecma_common::{Diagnostic, DiagnosticCategory};
use ecma_scanner::{JsToken, ScanOptions, Scanner};
use tracing::debug;

use super::args::CliArgs;
use super::config::{ScanConfig, load_config};
use super::reporter::TokenRecord;

/// Everything one scan produced.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Tokens in source order, without the end-of-file marker.
    pub tokens: Vec<TokenRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanReport {
    /// Warnings alone do not count.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.category == DiagnosticCategory::Error)
    }
}

pub fn scan_source(source: &str, options: ScanOptions) -> ScanReport {
    let mut scanner = Scanner::with_options(source, options);
    let spans = scanner.scan_all();
    let tokens: Vec<TokenRecord> = spans
        .iter()
        .filter(|span| span.token != JsToken::EndOfFile)
        .map(|span| TokenRecord::new(span, scanner.source_text(span)))
        .collect();
    let diagnostics = scanner.into_sink().into_diagnostics();
    debug!(
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "scanned source"
    );
    ScanReport {
        tokens,
        diagnostics,
    }
}

/// Options from `--config`, with command-line switches applied on top.
pub fn resolve_options(args: &CliArgs) -> Result<ScanOptions> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ScanConfig::default(),
    };
    Ok(args.scan_options(config.scan))
}

pub fn run(args: &CliArgs) -> Result<ScanReport> {
    let options = resolve_options(args)?;
    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    debug!(file = %args.file.display(), ?options, "scanning file");
    Ok(scan_source(&source, options))
}
