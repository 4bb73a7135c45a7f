#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use ecma::cli::args::{CliArgs, OutputFormat};
use ecma::cli::driver;
use ecma::cli::reporter::Reporter;

fn main() -> Result<ExitCode> {
    // No-op unless ECMA_LOG or RUST_LOG is set (see src/tracing_config.rs).
    ecma::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let report = driver::run(&args)?;

    let reporter = Reporter::new(!args.no_color && std::io::stderr().is_terminal());
    let listing = match args.format {
        OutputFormat::Text => reporter.render_tokens(&report.tokens),
        OutputFormat::Json => reporter.render_json(&report.tokens)?,
    };
    if !listing.is_empty() {
        println!("{listing}");
    }

    if !report.diagnostics.is_empty() {
        let file = args.file.display().to_string();
        eprintln!("{}", reporter.render_diagnostics(&file, &report.diagnostics));
    }

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
