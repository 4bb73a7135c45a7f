//! Character classification.
//!
//! Identifier validity follows the Unicode identifier categories: letters
//! (Lu, Ll, Lt, Lm, Lo, Nl) may start an identifier, and combining marks
//! (Mn, Mc), decimal digits (Nd) and connector punctuation (Pc) may continue
//! one. The category data comes from the `unicode-xid` tables rather than
//! from `char` methods, so the answers are pinned to [`UNICODE_VERSION`]
//! instead of drifting with the toolchain's standard library.

use crate::keywords::text_to_keyword;
use unicode_xid::UnicodeXID;

/// Unicode version of the identifier classification tables.
pub const UNICODE_VERSION: (u64, u64, u64) = unicode_xid::UNICODE_VERSION;

pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Line terminators: LF, CR, LINE SEPARATOR, PARAGRAPH SEPARATOR.
#[inline]
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Blank space that is not a line terminator (tab, vertical tab, form feed,
/// space, no-break space, byte order mark and the Zs category).
#[inline]
pub fn is_blank_space(ch: char) -> bool {
    match ch {
        ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\u{00A0}' | BYTE_ORDER_MARK => true,
        '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => true,
        _ => false,
    }
}

#[inline]
pub fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// Value of a hex digit, if `ch` is one.
#[inline]
pub fn hex_value(ch: char) -> Option<u32> {
    ch.to_digit(16)
}

#[inline]
pub fn is_ascii_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

#[inline]
pub fn is_ascii_identifier_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Whether `ch` may begin an identifier.
pub fn is_valid_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        return is_ascii_identifier_start(ch);
    }
    ch.is_xid_start()
}

/// Whether `ch` may continue an identifier.
pub fn is_valid_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        return is_ascii_identifier_part(ch);
    }
    ch.is_xid_continue() || ch == ZERO_WIDTH_NON_JOINER || ch == ZERO_WIDTH_JOINER
}

/// Whether `name` is a valid identifier under the full Unicode rules and
/// is not a reserved word (strict-mode-only words are accepted).
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_valid_identifier_start(first) || !chars.all(is_valid_identifier_part) {
        return false;
    }
    !text_to_keyword(name).is_some_and(|token| token.is_keyword(false))
}

/// ASCII-only identifier check for output that must survive any encoding.
///
/// Only `[A-Za-z_$][A-Za-z0-9_$]*` qualifies.
pub fn is_safe_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_ascii_identifier_start(first) => chars.all(is_ascii_identifier_part),
        _ => false,
    }
}
