//! Filter configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzhopError, Result};

/// Configuration for [`FuzzyFilter`](crate::filter::FuzzyFilter).
///
/// ```
/// use fuzzhop::filter::FilterConfig;
///
/// let config = FilterConfig::new(["name", "ability"]).max_results_shown(50);
/// assert!(config.validate().is_ok());
/// assert!(FilterConfig::new(Vec::<String>::new()).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Fields to match, in order. The order also drives tie-breaking.
    pub fields: Vec<String>,
    /// How many results the caller will display. When it is below a fifth of
    /// the matches, only the top results are put in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results_shown: Option<usize>,
}

impl FilterConfig {
    /// Create a configuration matching `fields` in the given order.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterConfig {
            fields: fields.into_iter().map(Into::into).collect(),
            max_results_shown: None,
        }
    }

    /// Set the number of results the caller will display.
    pub fn max_results_shown(mut self, max_results_shown: usize) -> Self {
        self.max_results_shown = Some(max_results_shown);
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FilterConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Fail with a configuration error when no fields are declared.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(FuzzhopError::config("fields must name at least one field"));
        }
        if let Some(field) = self.fields.iter().find(|f| f.is_empty()) {
            return Err(FuzzhopError::config(format!(
                "field names must not be empty (got {field:?})"
            )));
        }
        Ok(())
    }

    /// The top-N size to select when `result_count` matches are enough to
    /// skip the full sort, i.e. when the hint is below a fifth of them.
    pub fn top_n_limit(&self, result_count: usize) -> Option<usize> {
        self.max_results_shown
            .filter(|&n| n.saturating_mul(5) < result_count)
    }
}
