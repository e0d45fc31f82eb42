//! Highlighting of matched ranges.
//!
//! A [`HighlightSequence`] splits a target string into alternating
//! non-matched and matched segments, always starting with a (possibly empty)
//! non-matched one. Concatenating the segments gives back the target.

use serde::{Deserialize, Serialize};

use crate::matching::{MatchRange, MatchResult, score_only};

/// Alternating non-match / match segments of a target string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightSequence(Vec<String>);

impl HighlightSequence {
    /// All segments; even positions are non-matches, odd positions matches.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Segments borrowed as `&str`.
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    pub fn into_segments(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The matched segments only.
    pub fn matched(&self) -> impl Iterator<Item = &str> {
        self.0.iter().skip(1).step_by(2).map(String::as_str)
    }

    /// Rejoin all segments into the original target string.
    pub fn concat(&self) -> String {
        self.0.concat()
    }

    /// Render with matched segments wrapped in `open` and `close`.
    pub fn render_with(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for (i, segment) in self.0.iter().enumerate() {
            if i % 2 == 1 {
                out.push_str(open);
                out.push_str(segment);
                out.push_str(close);
            } else {
                out.push_str(segment);
            }
        }
        out
    }
}

impl From<HighlightSequence> for Vec<String> {
    fn from(sequence: HighlightSequence) -> Self {
        sequence.0
    }
}

/// Split `target` into highlight segments using char-offset `ranges`.
///
/// Ranges must be ascending and non-overlapping. Offsets past the end of
/// `target` are clamped, so the output always covers `target` exactly once.
/// With no ranges the whole target is one non-matched segment.
///
/// ```
/// use fuzzhop::highlight::highlights_from_ranges;
/// use fuzzhop::matching::MatchRange;
///
/// let highlights = highlights_from_ranges("my example", &[MatchRange::new(3, 2)]);
/// assert_eq!(highlights.as_strs(), vec!["my ", "ex", "ample"]);
/// ```
pub fn highlights_from_ranges(target: &str, ranges: &[MatchRange]) -> HighlightSequence {
    if ranges.is_empty() {
        return HighlightSequence(vec![target.to_string()]);
    }

    // byte offset of every char plus the end; not needed for ASCII
    let offsets: Option<Vec<usize>> = (!target.is_ascii()).then(|| {
        target
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(target.len()))
            .collect()
    });
    let to_byte = |idx: usize| match &offsets {
        Some(offsets) => offsets[idx.min(offsets.len() - 1)],
        None => idx.min(target.len()),
    };

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut last = 0;

    for range in ranges {
        let start = to_byte(range.index).max(last);
        let end = to_byte(range.end()).max(start);
        segments.push(target[last..start].to_string());
        segments.push(target[start..end].to_string());
        last = end;
    }

    if last < target.len() {
        segments.push(target[last..].to_string());
    }

    HighlightSequence(segments)
}

/// Score and highlights of a single-target match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub score: i64,
    pub highlights: HighlightSequence,
}

/// Match `search` against `target` and return the highlights, or `None`.
///
/// ```
/// use fuzzhop::fuzzy_match;
///
/// let highlights = fuzzy_match("FuzzBunny", "fb").unwrap();
/// assert_eq!(highlights.as_strs(), vec!["", "F", "uzz", "B", "unny"]);
/// assert!(fuzzy_match("Los Angeles", "\"LA").is_none());
/// ```
pub fn fuzzy_match(target: &str, search: &str) -> Option<HighlightSequence> {
    fuzzy_match_scored(target, search).map(|m| m.highlights)
}

/// Like [`fuzzy_match`] but keeps the score.
pub fn fuzzy_match_scored(target: &str, search: &str) -> Option<FuzzyMatch> {
    let MatchResult { score, ranges } = score_only(target, search)?;
    Some(FuzzyMatch {
        score,
        highlights: highlights_from_ranges(target, &ranges),
    })
}
