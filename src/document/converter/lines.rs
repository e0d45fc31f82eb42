//! Plain text converter: one document per non-blank line.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::document::converter::DocumentConverter;
use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::Result;

/// Field name used when none is given.
pub const DEFAULT_TEXT_FIELD: &str = "text";

/// A document converter for line-oriented text files.
#[derive(Debug, Clone)]
pub struct LinesDocumentConverter {
    field: String,
}

impl Default for LinesDocumentConverter {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_FIELD)
    }
}

impl LinesDocumentConverter {
    /// Create a converter storing each line under `field`.
    pub fn new<S: Into<String>>(field: S) -> Self {
        LinesDocumentConverter {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Iterator over line documents.
pub struct LinesDocumentIterator {
    lines: Lines<BufReader<File>>,
    field: String,
}

impl Iterator for LinesDocumentIterator {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            // Kept untrimmed; matching works on the raw text.
            if line.trim().is_empty() {
                continue;
            }
            let mut doc = Document::new();
            doc.add_field(self.field.clone(), FieldValue::Text(line));
            return Some(Ok(doc));
        }
    }
}

impl DocumentConverter for LinesDocumentConverter {
    type Iter = LinesDocumentIterator;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;
        Ok(LinesDocumentIterator {
            lines: BufReader::new(file).lines(),
            field: self.field.clone(),
        })
    }
}
