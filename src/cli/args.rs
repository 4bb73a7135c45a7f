use clap::{Parser, ValueEnum};
use ecma_scanner::ScanOptions;
use std::path::PathBuf;

/// Print the tokens of an ECMAScript source file.
#[derive(Parser, Debug)]
#[command(name = "ecma-tokens", version, about)]
pub struct CliArgs {
    /// Source file to scan.
    pub file: PathBuf,

    /// JSON file with scanner options (`{"scan": {"strictMode": true}}`).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Classify the strict-mode reserved words as keywords.
    #[arg(long)]
    pub strict: bool,

    /// Omit whitespace, line terminators and comments from the listing.
    #[arg(long)]
    pub skip_trivia: bool,

    /// Listing format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable coloured diagnostics.
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `line:col Kind "text"` line per token.
    Text,
    /// A JSON array of token objects.
    Json,
}

impl CliArgs {
    /// Switches given on the command line turn options on; they never turn
    /// off what the config file enabled.
    pub fn scan_options(&self, base: ScanOptions) -> ScanOptions {
        ScanOptions {
            strict_mode: base.strict_mode || self.strict,
            skip_trivia: base.skip_trivia || self.skip_trivia,
        }
    }
}
