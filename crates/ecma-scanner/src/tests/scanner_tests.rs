//! Tests for the scanner.

use crate::diagnostics::DiagnosticCollection;
use crate::scanner::{ResumableState, ScanOptions, Scanner};
use crate::span::TokenSpan;
use crate::token::JsToken;
use ecma_common::{DiagnosticCategory, JsError, SourceLocation};

fn scan(source: &str) -> (Vec<TokenSpan>, Scanner) {
    let mut scanner = Scanner::new(source);
    let spans = scanner.scan_all();
    (spans, scanner)
}

fn kinds(source: &str) -> Vec<JsToken> {
    let options = ScanOptions {
        skip_trivia: true,
        ..ScanOptions::default()
    };
    Scanner::with_options(source, options)
        .scan_all()
        .iter()
        .map(|span| span.token)
        .collect()
}

fn first_token(source: &str, regex_hint: bool) -> (TokenSpan, Scanner) {
    let mut scanner = Scanner::new(source);
    let span = scanner.scan_next_token(regex_hint);
    (span, scanner)
}

fn assert_lossless(source: &str) {
    let (spans, scanner) = scan(source);
    let mut rebuilt = String::new();
    let mut expected_start = 0;
    for span in &spans {
        assert_eq!(span.start, expected_start, "gap before {span} in {source:?}");
        expected_start = span.end;
        rebuilt.push_str(&scanner.source_text(span));
    }
    assert_eq!(rebuilt, source);
    assert_eq!(spans.last().map(|s| s.token), Some(JsToken::EndOfFile));
}

// =============================================================================
// Coverage
// =============================================================================

#[test]
fn test_retokenization_is_lossless() {
    assert_lossless(
        "var x = /ab+c/gi.test(s); // done\r\n/* multi\nline */ y >>>= 0x1F;\u{2028}z",
    );
}

#[test]
fn test_retokenization_is_lossless_with_errors() {
    for source in [
        "'unterminated",
        "\"line\nbreak\"",
        "/* open",
        "0x",
        "1e+",
        "\\u00",
        "#@",
        "a\u{2028}b",
        "'\\xZZ'",
        "x / y / z",
        "/[/]/ /",
        "",
    ] {
        assert_lossless(source);
    }
}

#[test]
fn test_iterator_ends_after_eof() {
    let tokens: Vec<JsToken> = Scanner::new("a b").map(|span| span.token).collect();
    assert_eq!(
        tokens,
        vec![
            JsToken::Identifier,
            JsToken::WhiteSpace,
            JsToken::Identifier,
            JsToken::EndOfFile
        ]
    );
}

#[test]
fn test_trailing_nul_is_end_of_file() {
    let (spans, _) = scan("a\0");
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[1].token, JsToken::EndOfFile);
    assert_eq!((spans[1].start, spans[1].end), (1, 2));
}

#[test]
fn test_skip_trivia() {
    assert_eq!(
        kinds("a /* c */ + // x\n b"),
        vec![
            JsToken::Identifier,
            JsToken::Plus,
            JsToken::Identifier,
            JsToken::EndOfFile
        ]
    );
}

// =============================================================================
// Identifiers and keywords
// =============================================================================

#[test]
fn test_strict_mode_keywords() {
    assert_eq!(kinds("let")[0], JsToken::Identifier);
    let mut strict = Scanner::with_options(
        "let",
        ScanOptions {
            strict_mode: true,
            ..ScanOptions::default()
        },
    );
    assert_eq!(strict.next_token().token, JsToken::Let);
}

#[test]
fn test_keywords_need_whole_match() {
    assert_eq!(kinds("if ifx if$ iF")[..4], [
        JsToken::If,
        JsToken::Identifier,
        JsToken::Identifier,
        JsToken::Identifier
    ]);
}

#[test]
fn test_escaped_keyword_is_identifier() {
    let (span, scanner) = first_token("\\u0076ar", false);
    assert_eq!(span.token, JsToken::Identifier);
    assert_eq!(scanner.token_value(), "var");
    assert_eq!(span.len(), 8);
}

#[test]
fn test_escape_inside_identifier() {
    let (span, scanner) = first_token("a\\u0062c", false);
    assert_eq!(span.token, JsToken::Identifier);
    assert_eq!(scanner.token_value(), "abc");
}

#[test]
fn test_escape_that_cannot_start_identifier() {
    let (span, scanner) = first_token("\\u0031", false);
    assert_eq!(span.token, JsToken::Error);
    assert_eq!(span.len(), 1);
    assert!(scanner.diagnostics().contains(JsError::IllegalChar));
}

#[test]
fn test_unicode_identifier() {
    let (span, scanner) = first_token("π2 = 1", false);
    assert_eq!(span.token, JsToken::Identifier);
    assert_eq!(scanner.token_value(), "π2");
}

// =============================================================================
// Regular expressions and division
// =============================================================================

#[test]
fn test_regex_with_hint() {
    let (span, scanner) = first_token("/abc/g", true);
    assert_eq!(span.token, JsToken::RegularExpression);
    assert_eq!((span.start, span.end), (0, 6));
    assert_eq!(scanner.token_value(), "abc");
    assert_eq!(scanner.regex_flags(), Some("g"));
}

#[test]
fn test_slash_without_hint_is_divide() {
    let (span, _) = first_token("/ 2", false);
    assert_eq!(span.token, JsToken::Divide);
    assert_eq!(span.len(), 1);
}

#[test]
fn test_divide_assign_without_hint() {
    let (span, _) = first_token("/= 2", false);
    assert_eq!(span.token, JsToken::DivideAssign);
}

#[test]
fn test_unterminated_regex_falls_back_to_divide() {
    let (span, scanner) = first_token("/abc\n/", true);
    assert_eq!(span.token, JsToken::Divide);
    assert_eq!(span.len(), 1);
    assert!(scanner.diagnostics().is_empty());
}

#[test]
fn test_regex_slash_in_class_and_escape() {
    let (span, scanner) = first_token("/[/]\\//", true);
    assert_eq!(span.token, JsToken::RegularExpression);
    assert_eq!(span.len(), 7);
    assert_eq!(scanner.token_value(), "[/]\\/");
    assert_eq!(scanner.regex_flags(), Some(""));
}

#[test]
fn test_automatic_regex_hint() {
    assert_eq!(
        kinds("a / b / c"),
        vec![
            JsToken::Identifier,
            JsToken::Divide,
            JsToken::Identifier,
            JsToken::Divide,
            JsToken::Identifier,
            JsToken::EndOfFile
        ]
    );
    assert_eq!(
        kinds("x = /re/i"),
        vec![
            JsToken::Identifier,
            JsToken::Assign,
            JsToken::RegularExpression,
            JsToken::EndOfFile
        ]
    );
    assert_eq!(kinds("(a) / 2")[3], JsToken::Divide);
    assert_eq!(kinds("return /x/")[1], JsToken::RegularExpression);
}

#[test]
fn test_regex_allowed_after() {
    assert!(JsToken::regex_allowed_after(None));
    assert!(JsToken::regex_allowed_after(Some(JsToken::LeftParenthesis)));
    assert!(JsToken::regex_allowed_after(Some(JsToken::Return)));
    assert!(!JsToken::regex_allowed_after(Some(JsToken::RightBracket)));
    assert!(!JsToken::regex_allowed_after(Some(JsToken::NumericLiteral)));
    assert!(!JsToken::regex_allowed_after(Some(JsToken::Let)));
    // The placeholder kind is a real token, not an absent one.
    assert!(JsToken::regex_allowed_after(Some(JsToken::None)));
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn test_unicode_escape_in_string() {
    let (span, scanner) = first_token("\"\\u0041\"", false);
    assert_eq!(span.token, JsToken::StringLiteral);
    assert_eq!(scanner.token_value(), "A");
    assert!(scanner.diagnostics().is_empty());
}

#[test]
fn test_simple_escapes() {
    let (_, scanner) = first_token(r#"'\b\t\n\v\f\r\"\'\\\q'"#, false);
    assert_eq!(scanner.token_value(), "\u{8}\t\n\u{B}\u{C}\r\"'\\q");
}

#[test]
fn test_bad_hex_escape_keeps_text() {
    let (span, scanner) = first_token("'\\xZZ'", false);
    assert_eq!(span.token, JsToken::StringLiteral);
    assert_eq!(scanner.token_value(), "\\xZZ");
    let diagnostics = scanner.diagnostics().diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].error, JsError::BadHexEscapeSequence);
    assert_eq!((diagnostics[0].start, diagnostics[0].end), (1, 3));
}

#[test]
fn test_surrogate_pair_escape() {
    let (_, scanner) = first_token("'\\uD83D\\uDE00'", false);
    assert_eq!(scanner.token_value(), "😀");
}

#[test]
fn test_lone_surrogate_escape() {
    let (_, scanner) = first_token("'\\uD83Dx'", false);
    assert_eq!(scanner.token_value(), "\u{FFFD}x");
}

#[test]
fn test_octal_escapes() {
    let (_, scanner) = first_token("'\\101'", false);
    assert_eq!(scanner.token_value(), "A");
    assert!(scanner.diagnostics().contains(JsError::OctalLiteralsDeprecated));

    let (_, scanner) = first_token("'\\0'", false);
    assert_eq!(scanner.token_value(), "\0");
    assert!(scanner.diagnostics().is_empty());

    // First digit above 3 takes at most two digits.
    let (_, scanner) = first_token("'\\477'", false);
    assert_eq!(scanner.token_value(), "'7");
}

#[test]
fn test_line_continuation() {
    let (spans, scanner) = scan("'a\\\nb' c");
    assert_eq!(spans[0].token, JsToken::StringLiteral);
    assert_eq!(spans[0].len(), 6);
    assert_eq!(spans[2].start_location().line, 2);
    assert!(scanner.diagnostics().is_empty());
}

#[test]
fn test_unterminated_string_stops_at_line_break() {
    let (spans, scanner) = scan("'abc\nx");
    assert_eq!(spans[0].token, JsToken::StringLiteral);
    assert_eq!((spans[0].start, spans[0].end), (0, 4));
    assert_eq!(spans[1].token, JsToken::EndOfLine);
    assert!(scanner.diagnostics().contains(JsError::UnterminatedString));
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn test_numeric_values() {
    for (source, value) in [
        ("0", 0.0),
        ("42", 42.0),
        ("0x1F", 31.0),
        ("0XfF", 255.0),
        ("1.5e3", 1500.0),
        ("2E-2", 0.02),
        (".5", 0.5),
        ("5.", 5.0),
        ("019", 19.0),
    ] {
        let (span, scanner) = first_token(source, false);
        assert_eq!(span.token, JsToken::NumericLiteral, "{source}");
        assert_eq!(span.len() as usize, source.len(), "{source}");
        assert_eq!(scanner.number_value(), value, "{source}");
        assert!(scanner.diagnostics().is_empty(), "{source}");
    }
}

#[test]
fn test_legacy_octal_literal_warns() {
    let (span, scanner) = first_token("017", false);
    assert_eq!(span.token, JsToken::NumericLiteral);
    assert_eq!(scanner.number_value(), 15.0);
    let diagnostics = scanner.diagnostics();
    assert!(diagnostics.contains(JsError::OctalLiteralsDeprecated));
    assert!(!diagnostics.has_errors());
}

#[test]
fn test_number_running_into_identifier() {
    let (span, scanner) = first_token("3in x", false);
    assert_eq!(span.token, JsToken::NumericLiteral);
    assert_eq!(span.len(), 3);
    assert_eq!(scanner.number_value(), 3.0);
    assert!(scanner.diagnostics().contains(JsError::BadNumericLiteral));
}

#[test]
fn test_dangling_exponent() {
    let (span, scanner) = first_token("1e", false);
    assert_eq!(span.len(), 2);
    assert_eq!(scanner.number_value(), 1.0);
    assert!(scanner.diagnostics().contains(JsError::BadNumericLiteral));
}

#[test]
fn test_hex_prefix_without_digits() {
    let (span, scanner) = first_token("0x;", false);
    assert_eq!(span.len(), 2);
    assert!(scanner.diagnostics().contains(JsError::BadNumericLiteral));
}

#[test]
fn test_member_access_after_number() {
    assert_eq!(
        kinds("1..toString"),
        vec![
            JsToken::NumericLiteral,
            JsToken::AccessField,
            JsToken::Identifier,
            JsToken::EndOfFile
        ]
    );
}

// =============================================================================
// Punctuation
// =============================================================================

#[test]
fn test_longest_match_punctuation() {
    use JsToken::*;
    let source = ">>>= >>= >>> >> >= > === == = !== != ! <<= << <= < ++ += + -- -= - && &= & || |= | ^= ^ *= * %= % ~ ? : . , ; ( ) [ ] { }";
    let expected = vec![
        UnsignedRightShiftAssign,
        RightShiftAssign,
        UnsignedRightShift,
        RightShift,
        GreaterThanEqual,
        GreaterThan,
        StrictEqual,
        Equal,
        Assign,
        StrictNotEqual,
        NotEqual,
        LogicalNot,
        LeftShiftAssign,
        LeftShift,
        LessThanEqual,
        LessThan,
        Increment,
        PlusAssign,
        Plus,
        Decrement,
        MinusAssign,
        Minus,
        LogicalAnd,
        BitwiseAndAssign,
        BitwiseAnd,
        LogicalOr,
        BitwiseOrAssign,
        BitwiseOr,
        BitwiseXorAssign,
        BitwiseXor,
        MultiplyAssign,
        Multiply,
        ModuloAssign,
        Modulo,
        BitwiseNot,
        ConditionalIf,
        Colon,
        AccessField,
        Comma,
        Semicolon,
        LeftParenthesis,
        RightParenthesis,
        LeftBracket,
        RightBracket,
        LeftCurly,
        RightCurly,
        EndOfFile,
    ];
    let tokens = kinds(source);
    assert_eq!(tokens, expected);
    for token in &tokens[..tokens.len() - 1] {
        assert!(token.is_punctuation(), "{token}");
    }
}

#[test]
fn test_adjacent_operators_split_greedily() {
    assert_eq!(
        kinds("a+++b"),
        vec![
            JsToken::Identifier,
            JsToken::Increment,
            JsToken::Plus,
            JsToken::Identifier,
            JsToken::EndOfFile
        ]
    );
}

#[test]
fn test_illegal_character_recovery() {
    let (spans, scanner) = scan("a # b");
    assert_eq!(spans[2].token, JsToken::Error);
    assert_eq!(spans[2].len(), 1);
    assert_eq!(spans[4].token, JsToken::Identifier);
    assert!(scanner.diagnostics().contains(JsError::IllegalChar));
}

// =============================================================================
// Lines and locations
// =============================================================================

#[test]
fn test_line_terminator_run_is_one_token() {
    let (spans, _) = scan("a\r\nb\n\nc");
    let tokens: Vec<JsToken> = spans.iter().map(|s| s.token).collect();
    assert_eq!(
        tokens,
        vec![
            JsToken::Identifier,
            JsToken::EndOfLine,
            JsToken::Identifier,
            JsToken::EndOfLine,
            JsToken::Identifier,
            JsToken::EndOfFile
        ]
    );
    assert_eq!(spans[2].start_location(), SourceLocation::new(3, 2, 1));
    assert_eq!(spans[4].start_location(), SourceLocation::new(6, 4, 1));
}

#[test]
fn test_preceding_line_break() {
    let options = ScanOptions {
        skip_trivia: true,
        ..ScanOptions::default()
    };
    let mut scanner = Scanner::with_options("a /*\n*/ b\nc d", options);
    scanner.next_token();
    assert!(!scanner.has_preceding_line_break());
    scanner.next_token();
    assert!(scanner.has_preceding_line_break());
    scanner.next_token();
    assert!(scanner.has_preceding_line_break());
    scanner.next_token();
    assert!(!scanner.has_preceding_line_break());
}

#[test]
fn test_diagnostic_location() {
    let (_, scanner) = scan("x\n  #");
    let diagnostic = &scanner.diagnostics().diagnostics()[0];
    assert_eq!(diagnostic.location.line, 2);
    assert_eq!(diagnostic.location.column, 3);
}

#[test]
fn test_initial_location_offsets_positions() {
    let mut scanner = Scanner::new("");
    scanner.initialize(
        "a\nb",
        ResumableState::default(),
        SourceLocation::new(100, 5, 3),
    );
    let spans = scanner.scan_all();
    assert_eq!(spans[0].start, 100);
    assert_eq!(spans[0].start_location(), SourceLocation::new(100, 5, 3));
    assert_eq!(spans[2].start, 102);
    assert_eq!(spans[2].start_location(), SourceLocation::new(102, 6, 1));
    assert_eq!(scanner.source_text(&spans[2]), "b");
}

// =============================================================================
// Comments and resumption
// =============================================================================

#[test]
fn test_comment_resumes_across_chunks() {
    let mut scanner = Scanner::new("x /* start");
    let first = scanner.scan_all();
    assert_eq!(first[2].token, JsToken::MultipleLineComment);
    assert_eq!((first[2].start, first[2].end), (2, 10));
    assert_eq!(first[3].token, JsToken::EndOfFile);
    let state = scanner.current_state();
    assert!(state.in_multiline_comment);
    assert!(scanner.diagnostics().contains(JsError::UnterminatedComment));

    scanner.initialize("end */ y", state, SourceLocation::new(10, 1, 11));
    let second = scanner.scan_all();
    assert_eq!(second[0].token, JsToken::MultipleLineComment);
    assert_eq!((second[0].start, second[0].end), (10, 16));
    assert!(!scanner.current_state().in_multiline_comment);
    assert_eq!(second[2].token, JsToken::Identifier);
    assert_eq!(second[2].start, 17);
    assert_eq!(second[2].start_location().column, 18);
}

#[test]
fn test_comment_open_across_whole_chunk() {
    let state = ResumableState {
        in_multiline_comment: true,
    };
    let mut scanner = Scanner::new("");
    scanner.initialize("still\ninside", state, SourceLocation::START);
    let spans = scanner.scan_all();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].token, JsToken::MultipleLineComment);
    assert!(scanner.current_state().in_multiline_comment);
}

#[test]
fn test_single_line_comment_excludes_terminator() {
    let (spans, _) = scan("// hi\nx");
    assert_eq!(spans[0].token, JsToken::SingleLineComment);
    assert_eq!(spans[0].len(), 5);
    assert_eq!(spans[1].token, JsToken::EndOfLine);
}

// =============================================================================
// Sinks and options
// =============================================================================

#[test]
fn test_category_override() {
    let mut scanner = Scanner::new("017");
    scanner
        .sink_mut()
        .set_category(JsError::OctalLiteralsDeprecated, DiagnosticCategory::Error);
    scanner.scan_all();
    assert!(scanner.diagnostics().has_errors());
}

#[test]
fn test_vec_sink_receives_spans() {
    let mut scanner = Scanner::with_sink("@", ScanOptions::default(), Vec::new());
    scanner.scan_all();
    let reports = scanner.into_sink();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, JsError::IllegalChar);
    assert_eq!((reports[0].1.start, reports[0].1.end), (0, 1));
}

#[test]
fn test_borrowed_sink() {
    let mut collected = DiagnosticCollection::new();
    {
        let mut scanner = Scanner::with_sink("'open", ScanOptions::default(), &mut collected);
        scanner.scan_all();
    }
    assert!(collected.contains(JsError::UnterminatedString));
}

#[test]
fn test_scan_options_deserialize_camel_case() {
    let options: ScanOptions = serde_json::from_str(r#"{"strictMode": true}"#).unwrap();
    assert!(options.strict_mode);
    assert!(!options.skip_trivia);
}
