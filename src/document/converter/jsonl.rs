//! JSONL format document converter.
//!
//! Each line in the file should be a single JSON object:
//! ```jsonl
//! {"name": "Claire Bennet", "ability": "Rapid cellular regeneration"}
//! {"name": "Elle Bishop", "ability": "Electrokinesis", "season": 2}
//! ```
//!
//! Strings stay text, numbers and booleans keep their JSON type. Nested
//! arrays and objects are not searchable and are dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::document::converter::DocumentConverter;
use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::{FuzzhopError, Result};

/// A document converter for JSONL format.
#[derive(Debug, Clone, Default)]
pub struct JsonlDocumentConverter;

impl JsonlDocumentConverter {
    /// Create a new JSONL converter.
    pub fn new() -> Self {
        JsonlDocumentConverter
    }

    /// Parse a single JSON line into a Document.
    pub fn parse_line(&self, line: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| FuzzhopError::parse(format!("Failed to parse JSON: {e}")))?;

        let Value::Object(map) = value else {
            return Err(FuzzhopError::parse("Expected a JSON object per line"));
        };

        let mut doc = Document::new();
        for (key, val) in map {
            let field_value = match val {
                Value::String(s) => FieldValue::Text(s),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => FieldValue::Integer(i),
                    None => match n.as_f64() {
                        Some(f) => FieldValue::Float(f),
                        None => continue,
                    },
                },
                Value::Bool(b) => FieldValue::Boolean(b),
                Value::Null => FieldValue::Null,
                Value::Array(_) | Value::Object(_) => {
                    log::trace!("skipping nested field {key}");
                    continue;
                }
            };
            doc.add_field(key, field_value);
        }

        Ok(doc)
    }
}

/// Iterator over JSONL documents.
pub struct JsonlDocumentIterator {
    reader: BufReader<File>,
    line_number: usize,
}

impl Iterator for JsonlDocumentIterator {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let line_number = self.line_number;
                    return Some(JsonlDocumentConverter.parse_line(line).map_err(|e| {
                        FuzzhopError::parse(format!("line {line_number}: {e}"))
                    }));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

impl DocumentConverter for JsonlDocumentConverter {
    type Iter = JsonlDocumentIterator;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;

        Ok(JsonlDocumentIterator {
            reader: BufReader::new(file),
            line_number: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_jsonl_multiple_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"name": "Peter Petrelli", "season": 1}}"#).unwrap();
        writeln!(file, r#"{{"name": "Sylar", "season": 1}}"#).unwrap();
        file.flush().unwrap();

        let docs: Vec<_> = JsonlDocumentConverter::new()
            .convert(file.path())
            .unwrap()
            .collect();

        assert_eq!(docs.len(), 2);
        let doc1 = docs[0].as_ref().unwrap();
        assert_eq!(doc1.get_field("name").unwrap().as_text().unwrap(), "Peter Petrelli");
        let doc2 = docs[1].as_ref().unwrap();
        assert_eq!(doc2.get_field("name").unwrap().as_text().unwrap(), "Sylar");
    }

    #[test]
    fn test_jsonl_value_types() {
        let converter = JsonlDocumentConverter::new();
        let doc = converter
            .parse_line(r#"{"title": "2024", "year": 2024, "price": 19.99, "active": true, "note": null}"#)
            .unwrap();

        assert_eq!(doc.get_field("title").unwrap().as_text(), Some("2024"));
        assert!(matches!(doc.get_field("year").unwrap(), FieldValue::Integer(2024)));
        assert!(matches!(doc.get_field("price").unwrap(), FieldValue::Float(_)));
        assert!(matches!(doc.get_field("active").unwrap(), FieldValue::Boolean(true)));
        assert!(doc.get_field("note").unwrap().is_null());
    }

    #[test]
    fn test_jsonl_skips_nested_values() {
        let doc = JsonlDocumentConverter::new()
            .parse_line(r#"{"name": "Mohinder", "tags": ["a"], "meta": {"k": 1}}"#)
            .unwrap();
        assert_eq!(doc.len(), 1);
        assert!(!doc.has_field("tags"));
        assert!(!doc.has_field("meta"));
    }

    #[test]
    fn test_jsonl_rejects_non_objects() {
        let converter = JsonlDocumentConverter::new();
        assert!(converter.parse_line("[1, 2]").is_err());
        assert!(converter.parse_line("not json").is_err());
    }

    #[test]
    fn test_jsonl_empty_lines_and_line_numbers() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"name": "Ando"}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{{broken").unwrap();
        file.flush().unwrap();

        let docs: Vec<_> = JsonlDocumentConverter::new()
            .convert(file.path())
            .unwrap()
            .collect();

        assert_eq!(docs.len(), 2);
        assert!(docs[0].is_ok());
        let err = docs[1].as_ref().unwrap_err().to_string();
        assert!(err.contains("line 3"), "{err}");
    }
}
