//! Substring-then-fuzzy matching of one target string.

use crate::matching::boundary::{fold_char, fold_str};
use crate::matching::prefix::fuzzy_prefix_search;
use crate::matching::scorer::ranges_score;
use crate::matching::skip_index::SkipIndex;
use crate::matching::substring::{SearchNeedle, substring_match};
use crate::matching::MatchResult;

/// Trim and case-fold a raw search string.
///
/// Filtering many targets against one search string should do this once and
/// call [`match_prepared`] per target.
pub fn prepare_search(search: &str) -> String {
    fold_str(search.trim())
}

/// Match a raw search string against `target` without computing highlights.
///
/// Returns `None` when nothing matches. An empty (or whitespace-only) search
/// matches every non-empty target with [`MatchResult::unscored`].
///
/// ```
/// use fuzzhop::matching::{MatchRange, score_only};
///
/// let result = score_only("FuzzBunny", "fb").unwrap();
/// assert_eq!(result.ranges, vec![MatchRange::new(0, 1), MatchRange::new(4, 1)]);
/// assert!(score_only("FuzzBunny", "xyz").is_none());
/// ```
pub fn score_only(target: &str, search: &str) -> Option<MatchResult> {
    match_prepared(target, &prepare_search(search))
}

/// Match a search string prepared by [`prepare_search`] against `target`.
///
/// `target` keeps its original casing: the skip index needs it to find
/// camelCase boundaries.
pub fn match_prepared(target: &str, search: &str) -> Option<MatchResult> {
    if target.is_empty() {
        return None;
    }

    let needle = SearchNeedle::parse(search);
    if needle.is_empty() {
        return Some(MatchResult::unscored());
    }

    let folded_target = fold_str(target);
    if let Some(result) = substring_match(&folded_target, &needle) {
        return Some(result);
    }

    if !needle.allows_fuzzy() {
        return None;
    }

    let original: Vec<char> = target.chars().collect();
    let folded: Vec<char> = original.iter().copied().map(fold_char).collect();
    let search_chars: Vec<char> = needle.as_str().chars().collect();
    let skips = SkipIndex::build(&original);

    let ranges = fuzzy_prefix_search(&search_chars, &folded, &skips)?;
    Some(MatchResult {
        score: ranges_score(&ranges),
        ranges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchRange;

    #[test]
    fn test_prepare_search() {
        assert_eq!(prepare_search("  DeF  "), "def");
        assert_eq!(prepare_search("\"LA"), "\"la");
        assert_eq!(prepare_search("   "), "");
    }

    #[test]
    fn test_empty_search_is_unscored() {
        let result = score_only("abcdefg", "").unwrap();
        assert_eq!(result, MatchResult::unscored());
        assert!(result.is_unscored());
        assert_eq!(score_only("abcdefg", "   "), Some(MatchResult::unscored()));
    }

    #[test]
    fn test_empty_target_never_matches() {
        assert_eq!(score_only("", ""), None);
        assert_eq!(score_only("", "a"), None);
    }

    #[test]
    fn test_substring_first() {
        let result = score_only("Elle Bishop", "el").unwrap();
        assert_eq!(result.score, 2200);
        assert_eq!(result.ranges, vec![MatchRange::new(0, 2)]);
    }

    #[test]
    fn test_fuzzy_fallback_score() {
        let result = score_only("ab cdefg", "ac").unwrap();
        assert_eq!(result.ranges, vec![MatchRange::new(0, 1), MatchRange::new(3, 1)]);
        assert_eq!(result.score, 1300 + 300 + 197);
    }

    #[test]
    fn test_single_char_has_no_fuzzy_fallback() {
        assert!(score_only("abc", "z").is_none());
    }

    #[test]
    fn test_quoted_has_no_fuzzy_fallback() {
        assert!(score_only("Los Angeles", "\"LA").is_none());
        assert!(score_only("Los Angeles", "LA").is_some());
        let result = score_only("Las Vegas", "\"la").unwrap();
        assert_eq!(result.ranges, vec![MatchRange::new(0, 2)]);
    }

    #[test]
    fn test_deterministic() {
        let a = score_only("fuzzBunnyIsAwesome", "bia");
        let b = score_only("fuzzBunnyIsAwesome", "bia");
        assert_eq!(a, b);
        assert!(a.is_some());
    }
}
