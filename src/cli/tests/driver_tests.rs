use clap::Parser;
use std::fs;
use tempfile::TempDir;

use super::args::CliArgs;
use super::driver::{resolve_options, run, scan_source};
use ecma_common::JsError;
use ecma_scanner::ScanOptions;

#[test]
fn lists_every_token_but_end_of_file() {
    let report = scan_source("a = 1;", ScanOptions::default());
    let kinds: Vec<&str> = report.tokens.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec![
            "Identifier",
            "WhiteSpace",
            "Assign",
            "WhiteSpace",
            "NumericLiteral",
            "Semicolon"
        ]
    );
    assert!(report.diagnostics.is_empty());
    assert!(!report.has_errors());
}

#[test]
fn skip_trivia_drops_whitespace() {
    let options = ScanOptions {
        skip_trivia: true,
        ..ScanOptions::default()
    };
    let report = scan_source("a /* c */\n b", options);
    let texts: Vec<&str> = report.tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
    assert_eq!((report.tokens[1].line, report.tokens[1].column), (2, 2));
}

#[test]
fn warnings_do_not_fail() {
    let report = scan_source("017", ScanOptions::default());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].error, JsError::OctalLiteralsDeprecated);
    assert!(!report.has_errors());

    let report = scan_source("'open", ScanOptions::default());
    assert!(report.has_errors());
}

#[test]
fn config_file_and_switches_combine() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("scan.json");
    fs::write(&config, r#"{ "scan": { "skipTrivia": true } }"#).expect("write config");
    let source = temp.path().join("main.js");
    fs::write(&source, "let x").expect("write source");

    let args = CliArgs::try_parse_from([
        "ecma-tokens",
        "--strict",
        "--config",
        config.to_str().expect("utf-8 path"),
        source.to_str().expect("utf-8 path"),
    ])
    .expect("args");
    let options = resolve_options(&args).expect("options");
    assert!(options.strict_mode);
    assert!(options.skip_trivia);

    let report = run(&args).expect("run");
    let kinds: Vec<&str> = report.tokens.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(kinds, vec!["Let", "Identifier"]);
}

#[test]
fn missing_source_is_an_error() {
    let temp = TempDir::new().expect("temp dir");
    let source = temp.path().join("nope.js");
    let args = CliArgs::try_parse_from(["ecma-tokens", source.to_str().expect("utf-8 path")])
        .expect("args");
    let err = run(&args).unwrap_err();
    assert!(format!("{err:#}").contains("nope.js"));
}
