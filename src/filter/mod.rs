//! Multi-field filtering and ranking of record collections.
//!
//! Every declared field of every record is matched against the search
//! string. A record is kept when at least one field matches; its score is
//! the best field score. Results are sorted by descending score with
//! alphabetical tie-breaks over the declared fields, or, for large result
//! sets with a `max_results_shown` hint, only the top results are selected.
//!
//! An empty search keeps every record in input order with score 0.

pub mod config;
pub mod result;
pub mod searchable;
pub mod sort;

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::Result;
use crate::matching::{match_prepared, prepare_search};

pub use self::config::FilterConfig;
pub use self::result::FuzzyFilterResult;
pub use self::searchable::Searchable;
pub use self::sort::{Scored, locale_compare, score_sort, top_n_score_sort};

use self::result::ResultBuilder;

/// Filters records against search strings using a validated configuration.
#[derive(Debug, Clone)]
pub struct FuzzyFilter {
    config: FilterConfig,
}

impl FuzzyFilter {
    /// Create a filter, failing when the configuration declares no fields.
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(FuzzyFilter { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter and rank `items` against `search`.
    pub fn filter<'a, T: Searchable>(
        &self,
        items: &'a [T],
        search: &str,
    ) -> Vec<FuzzyFilterResult<'a, T>> {
        let search = prepare_search(search);
        let results: Vec<_> = items
            .iter()
            .filter_map(|item| self.match_item(item, &search))
            .collect();
        self.finish(results, items.len(), &search)
    }

    /// Same as [`filter`](Self::filter), matching records on the rayon
    /// thread pool. The output is identical.
    pub fn filter_par<'a, T: Searchable + Sync>(
        &self,
        items: &'a [T],
        search: &str,
    ) -> Vec<FuzzyFilterResult<'a, T>> {
        let search = prepare_search(search);
        let results: Vec<_> = items
            .par_iter()
            .filter_map(|item| self.match_item(item, &search))
            .collect();
        self.finish(results, items.len(), &search)
    }

    /// Match every declared field of `item` against a prepared search.
    fn match_item<'a, T: Searchable>(
        &self,
        item: &'a T,
        search: &str,
    ) -> Option<FuzzyFilterResult<'a, T>> {
        let mut builder = ResultBuilder::new();

        for field in &self.config.fields {
            let Some(text) = item.field_text(field).filter(|text| !text.is_empty()) else {
                continue;
            };
            if let Some(result) = match_prepared(text, search) {
                builder.add_match(field, text, result);
            }
        }

        if builder.has_match() || search.is_empty() {
            Some(builder.build(item))
        } else {
            None
        }
    }

    fn finish<'a, T: Searchable>(
        &self,
        mut results: Vec<FuzzyFilterResult<'a, T>>,
        total: usize,
        search: &str,
    ) -> Vec<FuzzyFilterResult<'a, T>> {
        if search.is_empty() {
            debug!("empty search, returning all {total} items unsorted");
            return results;
        }

        match self.config.top_n_limit(results.len()) {
            Some(n) => {
                trace!("selecting top {n} of {} results", results.len());
                top_n_score_sort(&mut results, n);
            }
            None => score_sort(&mut results, &self.config.fields),
        }

        debug!(
            "{} of {total} items matched {search:?} on fields {:?}",
            results.len(),
            self.config.fields
        );
        results
    }
}

/// Filter and rank `items` against `search` in one call.
///
/// Fails only when `config` declares no fields.
///
/// ```
/// use fuzzhop::filter::{FilterConfig, fuzzy_filter};
/// use serde_json::json;
///
/// let items = vec![
///     json!({"name": "Angela Petrelli"}),
///     json!({"name": "Elle Bishop"}),
///     json!({"name": "EL Hawkins"}),
/// ];
/// let results = fuzzy_filter(&items, "el", &FilterConfig::new(["name"])).unwrap();
/// let names: Vec<_> = results.iter().map(|r| r.item["name"].as_str().unwrap()).collect();
/// assert_eq!(names, vec!["EL Hawkins", "Elle Bishop", "Angela Petrelli"]);
/// ```
pub fn fuzzy_filter<'a, T: Searchable>(
    items: &'a [T],
    search: &str,
    config: &FilterConfig,
) -> Result<Vec<FuzzyFilterResult<'a, T>>> {
    let filter = FuzzyFilter::new(config.clone())?;
    Ok(filter.filter(items, search))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn heroes() -> Vec<Value> {
        vec![
            json!({"name": "EL Hawkins", "ability": "Phasing"}),
            json!({"name": "Elle Bishop", "ability": "Electrokinesis"}),
            json!({"name": "Angela Petrelli", "ability": "Enhanced dreaming"}),
            json!({"name": "Hiro Nakamura", "ability": "Space-time manipulation"}),
        ]
    }

    fn names<'a>(results: &[FuzzyFilterResult<'a, Value>]) -> Vec<&'a str> {
        results
            .iter()
            .map(|r| {
                let item: &'a Value = r.item;
                item["name"].as_str().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_empty_fields_fail() {
        let err = FuzzyFilter::new(FilterConfig::new(Vec::<String>::new())).unwrap_err();
        assert!(err.is_config());
        assert!(fuzzy_filter(&heroes(), "el", &FilterConfig::new(Vec::<String>::new())).is_err());
    }

    #[test]
    fn test_scores_and_order() {
        let items = heroes();
        let filter = FuzzyFilter::new(FilterConfig::new(["name"])).unwrap();
        let results = filter.filter(&items, "el");

        assert_eq!(names(&results), vec!["EL Hawkins", "Elle Bishop", "Angela Petrelli"]);
        let scores: Vec<_> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![2200, 2200, 1200]);
    }

    #[test]
    fn test_best_field_wins() {
        let items = heroes();
        let filter = FuzzyFilter::new(FilterConfig::new(["name", "ability"])).unwrap();
        let results = filter.filter(&items, "el");

        let angela = results
            .iter()
            .find(|r| r.item["name"] == "Angela Petrelli")
            .unwrap();
        assert_eq!(angela.score, 1200);
        assert!(angela.field_highlights("ability").is_none());

        let elle = results.iter().find(|r| r.item["name"] == "Elle Bishop").unwrap();
        assert_eq!(elle.score, 2200);
        assert_eq!(
            elle.field_highlights("ability").unwrap().as_strs(),
            vec!["", "El", "ectrokinesis"]
        );
    }

    #[test]
    fn test_empty_search_keeps_input_order() {
        let items = heroes();
        let filter = FuzzyFilter::new(FilterConfig::new(["name"])).unwrap();
        let results = filter.filter(&items, "   ");

        assert_eq!(results.len(), items.len());
        assert_eq!(names(&results)[0], "EL Hawkins");
        assert_eq!(names(&results)[3], "Hiro Nakamura");
        assert!(results.iter().all(|r| r.score == 0));
        assert_eq!(
            results[0].field_highlights("name").unwrap().as_strs(),
            vec!["EL Hawkins"]
        );
    }

    #[test]
    fn test_non_text_fields_are_skipped() {
        let items = vec![
            json!({"name": 42}),
            json!({"name": ""}),
            json!({"other": "el"}),
            json!({"name": "Elle"}),
        ];
        let results = fuzzy_filter(&items, "el", &FilterConfig::new(["name"])).unwrap();
        assert_eq!(names(&results), vec!["Elle"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let items: Vec<Value> = (0..500)
            .map(|i| json!({"name": format!("Item {i} Petrelli"), "ability": "Flight"}))
            .collect();
        let filter = FuzzyFilter::new(FilterConfig::new(["name", "ability"])).unwrap();

        let sequential = filter.filter(&items, "ip");
        let parallel = filter.filter_par(&items, "ip");
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 500);
    }

    #[test]
    fn test_top_n_path() {
        let items: Vec<Value> = (0..100)
            .map(|i| json!({"name": format!("{}el", "x".repeat(i))}))
            .collect();
        let config = FilterConfig::new(["name"]).max_results_shown(5);
        let results = fuzzy_filter(&items, "el", &config).unwrap();

        assert_eq!(results.len(), 100);
        let top: Vec<_> = results[..5].iter().map(|r| r.score).collect();
        let mut expected: Vec<i64> = results.iter().map(|r| r.score).collect();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(top, expected[..5].to_vec());
        assert_eq!(names(&results)[0], "el");
    }
}
