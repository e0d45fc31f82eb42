//! Matching and scoring of a search string against a single target string.
//!
//! Matching runs in two stages. A plain substring search is tried first;
//! when it misses and the search is neither quoted nor a single character,
//! the fuzzy prefix matcher aligns the search string against the target's
//! skip boundaries (word starts, case transitions, punctuation).

pub mod boundary;
pub mod matcher;
pub mod prefix;
pub mod scorer;
pub mod skip_index;
pub mod substring;

use serde::{Deserialize, Serialize};

pub use self::boundary::{fold_char, fold_str, is_alpha_numeric, is_punctuation, is_upper_case};
pub use self::matcher::{match_prepared, prepare_search, score_only};
pub use self::prefix::{fuzzy_prefix_search, prefix_match};
pub use self::scorer::{match_score, ranges_score};
pub use self::skip_index::SkipIndex;
pub use self::substring::{SearchNeedle, substring_match};

/// A matched slice of a target string, in char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRange {
    /// Offset of the first matched char.
    pub index: usize,
    /// Number of matched chars.
    pub len: usize,
}

impl MatchRange {
    /// Create a new range.
    pub fn new(index: usize, len: usize) -> Self {
        MatchRange { index, len }
    }

    /// Offset one past the last matched char.
    #[inline]
    pub fn end(&self) -> usize {
        self.index + self.len
    }
}

/// Score and ranges of a successful match.
///
/// Ranges are ascending and non-overlapping; adjacent ranges are always
/// merged into one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Rank of the match, higher is better.
    pub score: i64,
    /// Matched ranges of the target string.
    pub ranges: Vec<MatchRange>,
}

impl MatchResult {
    /// The result for an empty search: everything matches, nothing is
    /// highlighted and the score is zero.
    pub fn unscored() -> Self {
        MatchResult {
            score: 0,
            ranges: Vec::new(),
        }
    }

    /// Whether this result came from an empty search.
    pub fn is_unscored(&self) -> bool {
        self.ranges.is_empty()
    }
}
