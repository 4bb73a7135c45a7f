//! Tracing setup for the `ecma-tokens` binary.
//!
//! Off unless `ECMA_LOG` or `RUST_LOG` holds filter directives (`ECMA_LOG`
//! wins). `ECMA_LOG_FORMAT` picks the layer: `text` (default), `tree` for
//! `tracing-tree`'s indented output, or `json`.
//!
//! ```bash
//! # Why did this `/` scan as a divide?
//! ECMA_LOG=ecma_scanner=trace ECMA_LOG_FORMAT=tree ecma-tokens file.js
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Anything unrecognised means [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        match self {
            LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
            LogFormat::Tree => tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .boxed(),
        }
    }
}

/// What to install, decided from the raw variable values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// `None` when neither filter variable is set.
    pub fn select(
        ecma_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<LogSettings> {
        let directives = ecma_log.or(rust_log)?;
        let format = format.as_deref().map_or(LogFormat::Text, LogFormat::parse);
        Some(LogSettings { directives, format })
    }

    pub fn from_env() -> Option<LogSettings> {
        let var = |name: &str| std::env::var(name).ok();
        LogSettings::select(var("ECMA_LOG"), var("RUST_LOG"), var("ECMA_LOG_FORMAT"))
    }

    pub fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }
}

/// Install the global subscriber if logging was asked for. Output goes to
/// stderr so it never mixes with token listings on stdout.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    Registry::default()
        .with(settings.format.layer())
        .with(settings.filter())
        .init();
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
