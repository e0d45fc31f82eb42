//! Field lookup on arbitrary records.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// A record whose text fields can be looked up by name.
///
/// Returning `None` (missing field, non-text value) makes the filter skip
/// that field for this record.
pub trait Searchable {
    /// The text value of `field`, if it has one.
    fn field_text(&self, field: &str) -> Option<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field_text(&self, field: &str) -> Option<&str> {
        (**self).field_text(field)
    }
}

impl Searchable for Value {
    fn field_text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}

impl Searchable for HashMap<String, String> {
    fn field_text(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl Searchable for BTreeMap<String, String> {
    fn field_text(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}
