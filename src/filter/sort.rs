//! Ordering of filter results.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::filter::result::FuzzyFilterResult;
use crate::filter::searchable::Searchable;
use crate::matching::MatchResult;

/// Anything carrying a match score.
pub trait Scored {
    fn score(&self) -> i64;
}

impl Scored for i64 {
    fn score(&self) -> i64 {
        *self
    }
}

impl Scored for MatchResult {
    fn score(&self) -> i64 {
        self.score
    }
}

impl<T> Scored for FuzzyFilterResult<'_, T> {
    fn score(&self) -> i64 {
        self.score
    }
}

/// Compare two strings for display order.
///
/// Approximates root-locale collation in three levels:
/// base letters first (accents and case ignored, punctuation and symbols
/// before digits before letters), then accents (unaccented first), then
/// case (lower case first).
///
/// ```
/// use std::cmp::Ordering;
/// use fuzzhop::filter::sort::locale_compare;
///
/// assert_eq!(locale_compare("école", "fable"), Ordering::Less);
/// assert_eq!(locale_compare("ecole", "école"), Ordering::Less);
/// ```
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.nfd()
                .zip(b.nfd())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    x.is_uppercase().cmp(&y.is_uppercase())
                })
        })
}

/// Base letters of `s`, lower-cased and tagged with their collation class.
fn primary_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| {
            let class = if c.is_alphabetic() {
                2
            } else if c.is_numeric() {
                1
            } else {
                0
            };
            (class, c)
        })
}

/// Sort by descending score; ties compare each field's raw value in order
/// with [`locale_compare`] until one differs. The sort is stable.
pub fn score_sort<T: Searchable>(results: &mut [FuzzyFilterResult<'_, T>], fields: &[String]) {
    results.sort_by(|a, b| {
        b.score.cmp(&a.score).then_with(|| {
            fields
                .iter()
                .map(|field| {
                    locale_compare(
                        a.item.field_text(field).unwrap_or(""),
                        b.item.field_text(field).unwrap_or(""),
                    )
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    });
}

/// Move the `n` highest scores to the front in descending order.
///
/// Each pass scans the remainder for the maximum and swaps it into place.
/// Ties resolve by score only (the first maximum wins) and everything past
/// the first `n` is left in no particular order.
///
/// ```
/// use fuzzhop::filter::sort::top_n_score_sort;
///
/// let mut scores: Vec<i64> = (1..=10).collect();
/// top_n_score_sort(&mut scores, 3);
/// assert_eq!(scores, vec![10, 9, 8, 4, 5, 6, 7, 3, 2, 1]);
/// ```
pub fn top_n_score_sort<S: Scored>(items: &mut [S], n: usize) {
    let n = n.min(items.len());

    for i in 0..n {
        let mut max_idx = i;
        let mut max_score = items[i].score();

        for (j, item) in items.iter().enumerate().skip(i + 1) {
            let score = item.score();
            if score > max_score {
                max_idx = j;
                max_score = score;
            }
        }

        items.swap(i, max_idx);
    }
}
