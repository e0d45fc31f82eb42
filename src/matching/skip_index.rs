//! Skip index construction.
//!
//! A skip index marks word starts, case-transition starts and punctuation in
//! a target string. The fuzzy prefix matcher jumps between these offsets
//! instead of trying an alignment at every character.

use crate::matching::boundary::{is_alpha_numeric, is_punctuation, is_upper_case};

/// Strictly increasing boundary offsets (in chars) into a target string,
/// always terminated by a sentinel equal to the string length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipIndex {
    skips: Vec<usize>,
}

impl SkipIndex {
    /// Build the skip index for `target`.
    ///
    /// `target` must keep its original casing: upper-case transitions are
    /// part of the boundary rules (`FuzzBunny` has boundaries at `F` and `B`).
    pub fn build(target: &[char]) -> Self {
        let mut skips = Vec::with_capacity(target.len() / 4 + 2);
        let mut was_alpha_num = false;
        let mut was_upper = false;

        for (i, &c) in target.iter().enumerate() {
            let alpha_num = is_alpha_numeric(c);
            let upper = is_upper_case(c);

            if (alpha_num && !was_alpha_num) || (upper && !was_upper) || is_punctuation(c) {
                skips.push(i);
            }

            was_alpha_num = alpha_num;
            was_upper = upper;
        }

        // sentinel: every boundary i has a segment [skips[i], skips[i + 1])
        skips.push(target.len());

        SkipIndex { skips }
    }

    /// All offsets including the trailing sentinel.
    pub fn offsets(&self) -> &[usize] {
        &self.skips
    }

    /// Number of half-open segments, i.e. boundaries without the sentinel.
    pub fn segment_count(&self) -> usize {
        self.skips.len() - 1
    }

    /// Start offset of boundary `idx`.
    #[inline]
    pub fn start(&self, idx: usize) -> usize {
        self.skips[idx]
    }

    /// The segment `[start, end)` beginning at boundary `idx`.
    #[inline]
    pub fn segment(&self, idx: usize) -> (usize, usize) {
        (self.skips[idx], self.skips[idx + 1])
    }
}
