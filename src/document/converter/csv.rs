//! CSV format document converter.
//!
//! The first row contains field names, every following row becomes a
//! Document:
//! ```csv
//! name,ability
//! Claire Bennet,Rapid cellular regeneration
//! Elle Bishop,Electrokinesis
//! ```

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::document::converter::DocumentConverter;
use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::{FuzzhopError, Result};

/// A document converter for CSV format.
///
/// Values are kept as text unless type inference is switched on, since
/// only text fields take part in matching.
#[derive(Debug, Clone)]
pub struct CsvDocumentConverter {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
    /// Whether to trim whitespace from fields
    trim: bool,
    /// Whether to allow flexible field counts
    flexible: bool,
    /// Whether to turn numbers and booleans into typed values
    infer_types: bool,
}

impl Default for CsvDocumentConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvDocumentConverter {
    /// Create a new CSV converter with comma delimiter.
    pub fn new() -> Self {
        CsvDocumentConverter {
            delimiter: b',',
            trim: true,
            flexible: false,
            infer_types: false,
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace from fields.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set whether to allow flexible field counts.
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    /// Set whether to infer integers, floats and booleans.
    pub fn with_infer_types(mut self, infer_types: bool) -> Self {
        self.infer_types = infer_types;
        self
    }

    fn builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .flexible(self.flexible);
        builder
    }
}

/// Iterator over CSV documents.
pub struct CsvDocumentIterator {
    headers: StringRecord,
    records: StringRecordsIntoIter<File>,
    infer_types: bool,
}

impl CsvDocumentIterator {
    fn to_document(&self, record: &StringRecord) -> Document {
        let mut doc = Document::new();
        for (header, value) in self.headers.iter().zip(record.iter()) {
            if value.is_empty() {
                continue;
            }
            let field_value = if self.infer_types {
                FieldValue::infer(value)
            } else {
                FieldValue::Text(value.to_string())
            };
            doc.add_field(header, field_value);
        }
        doc
    }
}

impl Iterator for CsvDocumentIterator {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map(|record| self.to_document(&record))
                .map_err(|e| FuzzhopError::parse(format!("Failed to read CSV record: {e}"))),
        )
    }
}

impl DocumentConverter for CsvDocumentConverter {
    type Iter = CsvDocumentIterator;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let mut reader = self.builder().from_path(path.as_ref())?;

        let headers = reader
            .headers()
            .map_err(|e| FuzzhopError::parse(format!("Failed to read CSV headers: {e}")))?
            .clone();

        if headers.is_empty() {
            return Err(FuzzhopError::parse("CSV header is empty"));
        }

        Ok(CsvDocumentIterator {
            headers,
            records: reader.into_records(),
            infer_types: self.infer_types,
        })
    }
}
