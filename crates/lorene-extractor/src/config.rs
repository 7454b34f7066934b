//! Configuration for the Extractor

use crate::error::ExtractorError;
use crate::patterns::PatternTable;
use lorene_domain::Field;
use serde::{Deserialize, Serialize};

/// A user-supplied pattern for one field
///
/// Replaces the built-in row for `field` if there is one, otherwise adds a
/// row so quantities the built-in table ignores (`f_max`, `M_TOV`, ...) can
/// be picked up too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternOverride {
    /// Record field key, e.g. `"M_TOV"`
    pub field: String,

    /// Regular expression with exactly one capture group
    pub pattern: String,
}

impl PatternOverride {
    /// Resolve the field key
    pub fn resolve_field(&self) -> Result<Field, ExtractorError> {
        Field::parse(&self.field)
            .ok_or_else(|| ExtractorError::Config(format!("Unknown field '{}' in pattern override", self.field)))
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input text length (bytes)
    pub max_text_length: usize,

    /// Pattern replacements and additions
    pub patterns: Vec<PatternOverride>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_text_length == 0 {
            return Err(ExtractorError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        // Compiling is the only reliable check of a pattern
        self.pattern_table()?;
        Ok(())
    }

    /// Build the pattern table this configuration describes
    pub fn pattern_table(&self) -> Result<PatternTable, ExtractorError> {
        PatternTable::default_table()?.with_overrides(&self.patterns)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    /// Built-in patterns, 64 MiB input limit
    fn default() -> Self {
        Self {
            max_text_length: 64 * 1024 * 1024,
            patterns: Vec::new(),
        }
    }
}
