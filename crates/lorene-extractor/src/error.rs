//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractorError {
    /// A pattern matched but its capture is not a number
    #[error("Cannot parse field '{field}': captured text '{raw}' is not a number")]
    FieldParse {
        /// Field whose pattern matched
        field: String,
        /// Raw captured text
        raw: String,
    },

    /// Text exceeds maximum length
    #[error("Text too long: {0} bytes (max: {1})")]
    TextTooLong(usize, usize),

    /// Pattern failed to compile or has the wrong shape
    #[error("Invalid pattern for '{field}': {reason}")]
    InvalidPattern {
        /// Field the pattern belongs to
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
