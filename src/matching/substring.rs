//! Substring matching, the first and cheapest strategy.

use crate::matching::boundary::is_alpha_numeric;
use crate::matching::scorer::match_score;
use crate::matching::{MatchRange, MatchResult};

/// A search string with its quoting resolved.
///
/// A leading `"` turns on quoted mode: exactly one leading quote is removed,
/// plus one trailing quote if present, so `"la` and `"la"` are equivalent
/// while the user is still typing. Quoted searches never fall back to fuzzy
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNeedle<'a> {
    text: &'a str,
    quoted: bool,
}

impl<'a> SearchNeedle<'a> {
    /// Parse an already trimmed and folded search string.
    pub fn parse(search: &'a str) -> Self {
        match search.strip_prefix('"') {
            Some(rest) => SearchNeedle {
                text: rest.strip_suffix('"').unwrap_or(rest),
                quoted: true,
            },
            None => SearchNeedle {
                text: search,
                quoted: false,
            },
        }
    }

    /// The text to look for, without quotes.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the fuzzy prefix matcher may run after a substring miss.
    ///
    /// A single character must match as a substring or not at all.
    pub fn allows_fuzzy(&self) -> bool {
        !self.quoted && self.text.chars().nth(1).is_some()
    }
}

/// Look for `needle` as a plain substring of `folded_target`.
///
/// `folded_target` must already be case-folded. The resulting range is in
/// char offsets. A hit counts as a word prefix when the preceding char is
/// not alphanumeric.
pub fn substring_match(folded_target: &str, needle: &SearchNeedle<'_>) -> Option<MatchResult> {
    let byte_idx = folded_target.find(needle.as_str())?;
    let head = &folded_target[..byte_idx];

    let (index, len) = if folded_target.is_ascii() {
        (byte_idx, needle.as_str().len())
    } else {
        (head.chars().count(), needle.as_str().chars().count())
    };

    let is_word_prefix = head
        .chars()
        .next_back()
        .is_some_and(|prev| !is_alpha_numeric(prev));

    Some(MatchResult {
        score: match_score(index, len, is_word_prefix),
        ranges: vec![MatchRange::new(index, len)],
    })
}
