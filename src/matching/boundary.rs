//! Per-character predicates used to find token boundaries.
//!
//! Every code point at or above 127 counts as alphanumeric, so non-ASCII
//! text never splits into extra boundaries.

const START_UNICODE: u32 = 127;

/// ASCII letter, ASCII digit, or any code point >= 127.
#[inline]
pub fn is_alpha_numeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || c as u32 >= START_UNICODE
}

/// ASCII `A`..=`Z` only.
#[inline]
pub fn is_upper_case(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// ASCII punctuation: `!`..=`/`, `:`..=`@`, `[`..=`` ` ``, `{`..=`~`.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '!'..='/' | ':'..='@' | '['..='`' | '{'..='~')
}

/// Lowercase a single character without changing the character count.
///
/// Characters whose lowercase form expands to several code points are left
/// untouched, which keeps folded text aligned with the original.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold a whole string with [`fold_char`].
pub fn fold_str(s: &str) -> String {
    if s.is_ascii() {
        return s.to_ascii_lowercase();
    }
    s.chars().map(fold_char).collect()
}
