//! # fuzzhop
//!
//! Fuzzy matching for interactive filtering of lists of records.
//!
//! A search string matches a target either as a case-insensitive substring
//! or by hopping across the starts of words (including camelCase humps and
//! punctuation). Every match comes with a score and highlight segments that
//! mark the matched characters.
//!
//! ```
//! use fuzzhop::{FilterConfig, fuzzy_filter, fuzzy_match};
//! use serde_json::json;
//!
//! let highlights = fuzzy_match("Hiro Nakamura", "hn").unwrap();
//! assert_eq!(highlights.as_strs(), vec!["", "H", "iro ", "N", "akamura"]);
//!
//! let heroes = vec![json!({"name": "Claire Bennet"}), json!({"name": "Hiro Nakamura"})];
//! let results = fuzzy_filter(&heroes, "hiro", &FilterConfig::new(["name"])).unwrap();
//! assert_eq!(results.len(), 1);
//! ```

pub mod cli;
pub mod document;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod matching;

pub use crate::error::{FuzzhopError, Result};
pub use crate::filter::{FilterConfig, FuzzyFilter, FuzzyFilterResult, Searchable, fuzzy_filter};
pub use crate::highlight::{
    FuzzyMatch, HighlightSequence, fuzzy_match, fuzzy_match_scored, highlights_from_ranges,
};
pub use crate::matching::{MatchRange, MatchResult, score_only};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
