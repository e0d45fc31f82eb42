//! Match scoring.
//!
//! Scores are plain integers so results are reproducible across platforms.

use crate::matching::MatchRange;

/// Bonus for a match that begins at offset 0.
pub const SCORE_START_STR: i64 = 1000;
/// Base of the word-prefix bonus; the match index is subtracted from it.
pub const SCORE_PREFIX: i64 = 200;
/// Multiplier of the squared match length.
pub const SCORE_CONTIGUOUS: i64 = 300;

/// Score a single matched run of `len` chars starting at `index`.
///
/// Length is squared so one contiguous run outranks the same number of
/// characters split across fragments. A word-prefix bonus shrinks as the
/// match moves right and may go negative.
#[inline]
pub fn match_score(index: usize, len: usize, is_word_prefix: bool) -> i64 {
    let len = len as i64;
    let mut score = SCORE_CONTIGUOUS * len * len;

    if index == 0 {
        score += SCORE_START_STR;
    } else if is_word_prefix {
        score += SCORE_PREFIX - index as i64;
    }

    score
}

/// Total score of a fuzzy match: every range starts on a skip boundary, so
/// each one is scored as a word prefix.
pub fn ranges_score(ranges: &[MatchRange]) -> i64 {
    ranges
        .iter()
        .map(|range| match_score(range.index, range.len, true))
        .sum()
}
