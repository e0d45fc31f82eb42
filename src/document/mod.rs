//! Records to filter and loaders that build them from files.

pub mod converter;
#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;

// Re-export commonly used types
pub use converter::{DocumentConverter, InputFormat, load_documents};
pub use document::{Document, DocumentBuilder};
pub use field_value::FieldValue;
