//! Document converters for loading records from files.
//!
//! Each converter turns one file format into an iterator of [`Document`]s:
//!
//! ```no_run
//! use fuzzhop::document::converter::DocumentConverter;
//! use fuzzhop::document::converter::csv::CsvDocumentConverter;
//!
//! let converter = CsvDocumentConverter::new();
//! for doc in converter.convert("heroes.csv").unwrap() {
//!     let doc = doc.unwrap();
//!     println!("{:?}", doc);
//! }
//! ```

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::document::document::Document;
use crate::error::Result;

pub mod csv;
pub mod jsonl;
pub mod lines;

/// A trait for converting a file into an iterator of Documents.
pub trait DocumentConverter {
    /// The iterator type that yields documents.
    type Iter: Iterator<Item = Result<Document>>;

    /// Convert a file into an iterator of Documents.
    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter>;
}

/// Supported record file formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Comma separated values with a header row
    Csv,
    /// One JSON object per line
    Jsonl,
    /// One record per line of plain text
    Lines,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to plain lines.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => InputFormat::Csv,
            Some("jsonl") | Some("ndjson") | Some("json") => InputFormat::Jsonl,
            _ => InputFormat::Lines,
        }
    }
}

/// Load every record of `path`.
///
/// `text_field` names the single field of [`InputFormat::Lines`] records;
/// other formats carry their own field names. `infer_types` only applies to
/// CSV cells.
pub fn load_documents<P: AsRef<Path>>(
    path: P,
    format: InputFormat,
    text_field: &str,
    infer_types: bool,
) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let documents = match format {
        InputFormat::Csv => csv::CsvDocumentConverter::new()
            .with_infer_types(infer_types)
            .convert(path)?
            .collect::<Result<Vec<_>>>()?,
        InputFormat::Jsonl => jsonl::JsonlDocumentConverter::new()
            .convert(path)?
            .collect::<Result<Vec<_>>>()?,
        InputFormat::Lines => lines::LinesDocumentConverter::new(text_field)
            .convert(path)?
            .collect::<Result<Vec<_>>>()?,
    };

    log::info!(
        "loaded {} documents from {} as {:?}",
        documents.len(),
        path.display(),
        format
    );
    Ok(documents)
}
