//! Error types for the CLI application.

use lorene_extractor::ExtractorError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction failed for one input file
    #[error("{}: {}", .path.display(), .source)]
    Extract {
        /// Input file
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: ExtractorError,
    },

    /// Extractor setup error
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
