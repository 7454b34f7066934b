//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::patterns::PatternTable;
use lorene_domain::NeutronStarModel;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

static DECIMAL_DIGIT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d$").ok());

/// The Extractor turns the text of one output file into a model record
#[derive(Debug, Clone)]
pub struct Extractor {
    table: PatternTable,
    max_text_length: usize,
}

impl Extractor {
    /// Create an Extractor from a validated configuration
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        let table = config.pattern_table()?;
        debug!("Compiled {} patterns", table.rows().len());
        Ok(Self {
            table,
            max_text_length: config.max_text_length,
        })
    }

    /// Create an Extractor with the built-in pattern table
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(&ExtractorConfig::default())
    }

    /// Extract a model record from text
    ///
    /// Every row of the table is tried against the whole text and the first
    /// match wins. Rows are independent: a capture that is not a number does
    /// not stop the remaining rows from being scanned, but the call still
    /// fails with the first such capture in table order. A capture too large
    /// for an f64 counts as not a number.
    pub fn extract(&self, source: &str, text: &str) -> Result<NeutronStarModel, ExtractorError> {
        if text.len() > self.max_text_length {
            return Err(ExtractorError::TextTooLong(text.len(), self.max_text_length));
        }

        let mut model = NeutronStarModel::new(source);
        let mut failures = Vec::new();

        for row in self.table.rows() {
            let Some(captures) = row.regex.captures(text) else {
                continue;
            };
            let Some(raw) = captures.get(1).map(|m| m.as_str()) else {
                continue;
            };

            match parse_number(raw) {
                Some(value) => {
                    debug!(unit = row.unit, "{}: {} = {}", source, row.field, value);
                    model.set(row.field, value);
                }
                None => {
                    warn!("{}: cannot parse {} from '{}'", source, row.field, raw);
                    failures.push(ExtractorError::FieldParse {
                        field: row.field.key().to_string(),
                        raw: raw.to_string(),
                    });
                }
            }
        }

        if let Some(first) = failures.into_iter().next() {
            return Err(first);
        }

        model.derive();

        info!(
            "Extracted {} of {} quantities from {}",
            model.present_count(),
            lorene_domain::Field::COUNT,
            source
        );

        Ok(model)
    }
}

/// Parse a captured value into a finite f64
///
/// `\d` in the default patterns matches any Unicode decimal digit, so
/// digits from other scripts are folded to ASCII first.
fn parse_number(raw: &str) -> Option<f64> {
    ascii_digits(raw).parse::<f64>().ok().filter(|v| v.is_finite())
}

fn ascii_digits(raw: &str) -> Cow<'_, str> {
    if raw.is_ascii() {
        return Cow::Borrowed(raw);
    }
    let Some(digit) = DECIMAL_DIGIT.as_ref() else {
        return Cow::Borrowed(raw);
    };
    let is_digit = |c: char| {
        let mut buf = [0u8; 4];
        digit.is_match(c.encode_utf8(&mut buf))
    };

    raw.chars()
        .map(|c| {
            if c.is_ascii() || !is_digit(c) {
                return c;
            }
            // Decimal digits come in runs of whole 0..=9 blocks
            let mut start = c as u32;
            while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
                if prev.is_ascii() || !is_digit(prev) {
                    break;
                }
                start -= 1;
            }
            char::from_digit((c as u32 - start) % 10, 10).unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_digits_passes_ascii_through() {
        assert!(matches!(ascii_digits("1.40"), Cow::Borrowed("1.40")));
    }

    #[test]
    fn test_ascii_digits_folds_other_scripts() {
        assert_eq!(ascii_digits("١.٤٠"), "1.40");
        assert_eq!(ascii_digits("۱۲.۵"), "12.5");
        assert_eq!(ascii_digits("१.६२"), "1.62");
        assert_eq!(ascii_digits("１３.０"), "13.0");
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number("0.850"), Some(0.85));
        assert_eq!(parse_number(&"9".repeat(400)), None);
        assert_eq!(parse_number("."), None);
    }
}
