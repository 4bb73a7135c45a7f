//! Keyword dispatch table.
//!
//! Keywords are bucketed by their (ASCII lowercase) first letter. The
//! scanner only consults the table for identifier runs that begin with a
//! lowercase ASCII letter and contain no escapes, and a run matches a
//! keyword only if it is the whole keyword: `ifx` or `if$` stay identifiers.

use crate::token::JsToken;
use once_cell::sync::Lazy;

const KEYWORDS: &[(&str, JsToken)] = &[
    ("break", JsToken::Break),
    ("case", JsToken::Case),
    ("catch", JsToken::Catch),
    ("class", JsToken::Class),
    ("const", JsToken::Const),
    ("continue", JsToken::Continue),
    ("debugger", JsToken::Debugger),
    ("default", JsToken::Default),
    ("delete", JsToken::Delete),
    ("do", JsToken::Do),
    ("else", JsToken::Else),
    ("enum", JsToken::Enum),
    ("export", JsToken::Export),
    ("extends", JsToken::Extends),
    ("false", JsToken::False),
    ("finally", JsToken::Finally),
    ("for", JsToken::For),
    ("function", JsToken::Function),
    ("if", JsToken::If),
    ("implements", JsToken::Implements),
    ("import", JsToken::Import),
    ("in", JsToken::In),
    ("instanceof", JsToken::InstanceOf),
    ("interface", JsToken::Interface),
    ("let", JsToken::Let),
    ("new", JsToken::New),
    ("null", JsToken::Null),
    ("package", JsToken::Package),
    ("private", JsToken::Private),
    ("protected", JsToken::Protected),
    ("public", JsToken::Public),
    ("return", JsToken::Return),
    ("static", JsToken::Static),
    ("super", JsToken::Super),
    ("switch", JsToken::Switch),
    ("this", JsToken::This),
    ("throw", JsToken::Throw),
    ("true", JsToken::True),
    ("try", JsToken::Try),
    ("typeof", JsToken::TypeOf),
    ("var", JsToken::Var),
    ("void", JsToken::Void),
    ("while", JsToken::While),
    ("with", JsToken::With),
    ("yield", JsToken::Yield),
];

/// Keywords grouped by first letter, `a` through `z`.
static KEYWORD_TABLE: Lazy<[Vec<(&'static str, JsToken)>; 26]> = Lazy::new(|| {
    let mut table: [Vec<(&'static str, JsToken)>; 26] = Default::default();
    for &(text, token) in KEYWORDS {
        let bucket = (text.as_bytes()[0] - b'a') as usize;
        table[bucket].push((text, token));
    }
    table
});

/// The keywords that begin with `first`, or an empty slice.
pub fn keywords_starting_with(first: char) -> &'static [(&'static str, JsToken)] {
    if first.is_ascii_lowercase() {
        &KEYWORD_TABLE[(first as u8 - b'a') as usize]
    } else {
        &[]
    }
}

/// Map an identifier run to its keyword token, if it is one.
pub fn text_to_keyword(text: &str) -> Option<JsToken> {
    let first = text.chars().next()?;
    keywords_starting_with(first)
        .iter()
        .find(|(keyword, _)| *keyword == text)
        .map(|&(_, token)| token)
}

/// Whether `text` is a reserved word.
///
/// `let`, `yield`, `static` and the other future-reserved words only count
/// when `strict` is set.
pub fn is_keyword(text: &str, strict: bool) -> bool {
    text_to_keyword(text).is_some_and(|token| token.is_keyword(strict))
}

/// Every keyword spelling known to the scanner.
pub fn all_keywords() -> impl Iterator<Item = (&'static str, JsToken)> {
    KEYWORDS.iter().copied()
}
