//! Error types for the fuzzhop library.
//!
//! All fallible operations return [`FuzzhopError`] through the crate-wide
//! [`Result`] alias. A search that finds nothing is not an error: matching
//! functions return `None` for that case.
//!
//! # Examples
//!
//! ```
//! use fuzzhop::error::{FuzzhopError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FuzzhopError::config("fields must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for fuzzhop operations.
#[derive(Error, Debug)]
pub enum FuzzhopError {
    /// Invalid filter configuration (e.g. an empty field list).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input records could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O errors (reading record files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reader errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with FuzzhopError.
pub type Result<T> = std::result::Result<T, FuzzhopError>;

impl FuzzhopError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FuzzhopError::Config(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        FuzzhopError::Parse(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FuzzhopError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FuzzhopError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Whether this error came from a bad filter configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, FuzzhopError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FuzzhopError::config("no fields");
        assert_eq!(error.to_string(), "Configuration error: no fields");
        assert!(error.is_config());

        let error = FuzzhopError::parse("bad line");
        assert_eq!(error.to_string(), "Parse error: bad line");
        assert!(!error.is_config());

        let error = FuzzhopError::invalid_argument("runs must be positive");
        assert_eq!(error.to_string(), "Error: Invalid argument: runs must be positive");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = FuzzhopError::from(io_error);

        match error {
            FuzzhopError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
