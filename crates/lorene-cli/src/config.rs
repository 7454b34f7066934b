//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use crate::output::OutputMode;
use lorene_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Pattern table and input limits
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored status messages
    #[serde(default = "default_true")]
    pub color: bool,

    /// Output mode used when no mode flag is given
    #[serde(default = "default_format")]
    pub format: OutputMode,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".lorene").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.extractor.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputMode::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputMode {
    OutputMode::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputMode::Table);
        assert!(config.extractor.patterns.is_empty());
    }

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
            [settings]
            color = false
            format = "latex"

            [extractor]
            max_text_length = 4096

            [[extractor.patterns]]
            field = "f_max"
            pattern = 'Maximum.*?frequency.*?:\s*([\d.]+)'
            "#,
        )
        .unwrap();

        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputMode::Latex);
        assert_eq!(config.extractor.max_text_length, 4096);
        assert_eq!(config.extractor.patterns[0].field, "f_max");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("[settings]\ncolor = false\n").unwrap();
        assert_eq!(config.settings.format, OutputMode::Table);
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Config::from_toml("[settings]\nformat = \"csv\"\n").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\nformat = \"json\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.settings.format, OutputMode::Json);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("nope.toml").as_path()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_rejects_invalid_pattern() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[extractor.patterns]]\nfield = \"R_polar\"\npattern = 'x([0-9]+)'").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(CliError::Extractor(_))));
    }
}
