//! Fuzzy prefix matching over skip boundaries.
//!
//! `usam` matches `[U]nited [S]tates of [Am]erica`: the search string is
//! consumed segment by segment, each segment contributing the longest run of
//! equal characters from its start.
//!
//! The walk is greedy and never backtracks. Once an attempt has consumed
//! part of the search string inside a segment it keeps that alignment, so a
//! valid alignment that needs a different split can be missed.

use crate::matching::MatchRange;
use crate::matching::skip_index::SkipIndex;

/// Try to match `search` starting at boundary `skip_idx`.
///
/// Both `search` and `target` must be case-folded. Spaces on either side
/// are skipped without consuming the other cursor. Returns the matched
/// ranges, contiguous ones merged, or `None` when the boundaries run out
/// before the whole search string is consumed.
pub fn prefix_match(
    skip_idx: usize,
    search: &[char],
    target: &[char],
    skips: &SkipIndex,
) -> Option<Vec<MatchRange>> {
    let search_len = search.len();
    let mut search_idx = 0;
    let mut ranges: Vec<MatchRange> = Vec::new();

    for seg in skip_idx..skips.segment_count() {
        let (start, end) = skips.segment(seg);
        let mut target_idx = start;
        let mut match_len = 0;

        while target_idx < end && search_idx < search_len {
            let target_char = target[target_idx];
            let search_char = search[search_idx];

            if target_char == search_char {
                target_idx += 1;
                search_idx += 1;
                match_len += 1;
                continue;
            }

            if target_char == ' ' {
                target_idx += 1;
                continue;
            }
            if search_char == ' ' {
                search_idx += 1;
                continue;
            }

            // rest of the segment is abandoned
            break;
        }

        if match_len > 0 {
            match ranges.last_mut() {
                Some(last) if last.end() == start => last.len += match_len,
                _ => ranges.push(MatchRange::new(start, match_len)),
            }
        }

        if search_idx == search_len {
            return Some(ranges);
        }
    }

    None
}

/// Run [`prefix_match`] from every boundary whose first char equals the
/// first search char, returning the first attempt that succeeds.
pub fn fuzzy_prefix_search(
    search: &[char],
    target: &[char],
    skips: &SkipIndex,
) -> Option<Vec<MatchRange>> {
    let first = *search.first()?;

    (0..skips.segment_count())
        .filter(|&idx| target[skips.start(idx)] == first)
        .find_map(|idx| prefix_match(idx, search, target, skips))
}
