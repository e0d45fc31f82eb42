//! Filter results.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::highlight::{HighlightSequence, highlights_from_ranges};
use crate::matching::MatchResult;

/// One matched record with its best score and per-field highlights.
///
/// Fields that did not match have no entry in `highlights`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyFilterResult<'a, T> {
    /// The matched record.
    pub item: &'a T,
    /// Highest score across the matched fields (0 for an empty search).
    pub score: i64,
    /// Highlights of every matched field, keyed by field name.
    pub highlights: BTreeMap<String, HighlightSequence>,
}

impl<T> FuzzyFilterResult<'_, T> {
    /// Highlights of `field`, if it matched.
    pub fn field_highlights(&self, field: &str) -> Option<&HighlightSequence> {
        self.highlights.get(field)
    }
}

/// Per-record accumulator built while visiting the declared fields.
///
/// The score starts unset rather than at 0, so a record whose only match
/// scored below zero keeps that negative score instead of being raised to 0.
#[derive(Debug, Default)]
pub(crate) struct ResultBuilder {
    score: Option<i64>,
    highlights: BTreeMap<String, HighlightSequence>,
}

impl ResultBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a field match.
    pub(crate) fn add_match(&mut self, field: &str, text: &str, result: MatchResult) {
        self.score = Some(self.score.map_or(result.score, |best| best.max(result.score)));
        self.highlights
            .insert(field.to_string(), highlights_from_ranges(text, &result.ranges));
    }

    pub(crate) fn has_match(&self) -> bool {
        self.score.is_some()
    }

    pub(crate) fn build<T>(self, item: &T) -> FuzzyFilterResult<'_, T> {
        FuzzyFilterResult {
            item,
            score: self.score.unwrap_or(0),
            highlights: self.highlights,
        }
    }
}
