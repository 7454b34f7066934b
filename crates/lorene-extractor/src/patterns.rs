//! The field name → regular expression table
//!
//! The table is plain data. Each row says which record field it fills, the
//! pattern that finds it and the unit the value is quoted in. Adding a
//! quantity means adding a row, nothing else.

use crate::config::PatternOverride;
use crate::error::ExtractorError;
use lorene_domain::Field;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// One row of the pattern table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPattern {
    /// Record field filled by this row
    pub field: Field,
    /// Regular expression with exactly one capture group
    pub pattern: &'static str,
    /// Unit the value is quoted in, if the pattern expects one
    pub unit: Option<&'static str>,
}

macro_rules! row {
    ($field:ident, $pattern:expr) => {
        FieldPattern { field: Field::$field, pattern: $pattern, unit: None }
    };
    ($field:ident, $pattern:expr, $unit:expr) => {
        FieldPattern { field: Field::$field, pattern: $pattern, unit: Some($unit) }
    };
}

/// Patterns for the quantities printed by `nrotdiff` in `resu.d`
pub const DEFAULT_PATTERNS: &[FieldPattern] = &[
    // ── Masses ────────────────────────────────────────────────────────────
    row!(MGrav, r"Gravitational mass.*?:\s*([\d.]+)\s*M_?(?:sun|sol|⊙)", "M_sun"),
    row!(MBary, r"Baryonic mass.*?:\s*([\d.]+)\s*M_?(?:sun|sol|⊙)", "M_sun"),
    // ── Geometry ──────────────────────────────────────────────────────────
    row!(RCirc, r"(?:Circumferential|Equatorial).*?radius.*?:\s*([\d.]+)\s*km", "km"),
    row!(AxisRatio, r"(?:Axis ratio|r_p/r_eq).*?:\s*([\d.]+)"),
    // ── Rotation ──────────────────────────────────────────────────────────
    row!(FCentral, r"Central.*?frequency.*?:\s*([\d.]+)\s*Hz", "Hz"),
    row!(FEquatorial, r"Equatorial.*?frequency.*?:\s*([\d.]+)\s*Hz", "Hz"),
    row!(OmegaC, r"Omega_?c.*?:\s*([\d.]+)"),
    row!(J, r"Angular momentum.*?:\s*([\d.]+)"),
    row!(Lambda1, r"lambda_?1.*?:\s*([\d.]+)"),
    row!(Lambda2, r"lambda_?2.*?:\s*([\d.]+)"),
    // ── Stability and accuracy ────────────────────────────────────────────
    row!(TW, r"T/\|?W\|?.*?:\s*([\d.]+)"),
    row!(Grv2, r"GRV2.*?:\s*([\d.]+)\s*%?", "%"),
    row!(Grv3, r"GRV3.*?:\s*([\d.]+)\s*%?", "%"),
    // ── Thermodynamics ────────────────────────────────────────────────────
    row!(HCentral, r"Central.*?enthalpy.*?:\s*([\d.]+)"),
];

static DEFAULT_TABLE: LazyLock<Result<PatternTable, ExtractorError>> =
    LazyLock::new(compile_defaults);

fn compile_defaults() -> Result<PatternTable, ExtractorError> {
    let rows = DEFAULT_PATTERNS
        .iter()
        .map(|row| compile(row.field, row.pattern, row.unit))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PatternTable { rows })
}

/// A compiled row
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Record field filled by this row
    pub field: Field,
    /// Case-insensitive compiled expression
    pub regex: Regex,
    /// Unit the captured value is quoted in
    pub unit: &'static str,
}

/// Compiled pattern table, in scan order
#[derive(Debug, Clone)]
pub struct PatternTable {
    rows: Vec<CompiledPattern>,
}

impl PatternTable {
    /// The built-in table, compiled once per process
    pub fn default_table() -> Result<Self, ExtractorError> {
        (*DEFAULT_TABLE).clone()
    }

    /// Replace or add rows from configuration
    ///
    /// An override for a field that already has a row replaces that row in
    /// place; any other override is appended.
    pub fn with_overrides(mut self, overrides: &[PatternOverride]) -> Result<Self, ExtractorError> {
        for o in overrides {
            let field = o.resolve_field()?;
            let compiled = compile(field, &o.pattern, None)?;
            match self.rows.iter_mut().find(|row| row.field == field) {
                Some(row) => *row = compiled,
                None => self.rows.push(compiled),
            }
        }
        Ok(self)
    }

    /// Rows in scan order
    pub fn rows(&self) -> &[CompiledPattern] {
        &self.rows
    }

}

/// Compile a pattern case-insensitively and check it has one capture group
///
/// Without a unit hint the row takes the field's display unit.
pub(crate) fn compile(
    field: Field,
    pattern: &str,
    unit: Option<&'static str>,
) -> Result<CompiledPattern, ExtractorError> {
    if field.is_derived() {
        return Err(ExtractorError::InvalidPattern {
            field: field.key().to_string(),
            reason: "derived fields are computed, not matched".to_string(),
        });
    }

    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ExtractorError::InvalidPattern {
            field: field.key().to_string(),
            reason: e.to_string(),
        })?;

    // Group 0 is the whole match
    let groups = regex.captures_len() - 1;
    if groups != 1 {
        return Err(ExtractorError::InvalidPattern {
            field: field.key().to_string(),
            reason: format!("expected exactly one capture group, found {}", groups),
        });
    }

    Ok(CompiledPattern {
        field,
        regex,
        unit: unit.unwrap_or_else(|| field.unit()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn over(field: &str, pattern: &str) -> PatternOverride {
        PatternOverride {
            field: field.to_string(),
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn test_default_table_compiles() {
        let table = PatternTable::default_table().unwrap();
        assert_eq!(table.rows().len(), DEFAULT_PATTERNS.len());
    }

    #[test]
    fn test_default_table_has_unique_fields() {
        let mut fields: Vec<_> = DEFAULT_PATTERNS.iter().map(|r| r.field).collect();
        fields.sort();
        fields.dedup();
        assert_eq!(fields.len(), DEFAULT_PATTERNS.len());
    }

    #[test]
    fn test_unit_hints_match_field_units() {
        for row in DEFAULT_PATTERNS {
            if let Some(unit) = row.unit {
                assert_eq!(unit, row.field.unit(), "{}", row.field);
            }
        }
    }

    #[test]
    fn test_compiled_rows_carry_units() {
        let table = PatternTable::default_table()
            .unwrap()
            .with_overrides(&[over("f_max", r"f_max\s*=\s*([\d.]+)")])
            .unwrap();
        let unit_of = |field: Field| {
            table.rows().iter().find(|r| r.field == field).unwrap().unit
        };
        assert_eq!(unit_of(Field::MGrav), "M_sun");
        assert_eq!(unit_of(Field::AxisRatio), "");
        assert_eq!(unit_of(Field::FMax), "Hz");
    }

    #[test]
    fn test_default_table_skips_derived_fields() {
        assert!(DEFAULT_PATTERNS.iter().all(|r| !r.field.is_derived()));
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let table = PatternTable::default_table().unwrap();
        let row = table.rows().iter().find(|r| r.field == Field::MGrav).unwrap();
        assert!(row.regex.is_match("GRAVITATIONAL MASS : 1.4 MSUN"));
    }

    #[test]
    fn test_override_replaces_in_place() {
        let table = PatternTable::default_table()
            .unwrap()
            .with_overrides(&[over("M_grav", r"M_ADM\s*=\s*([\d.]+)")])
            .unwrap();
        assert_eq!(table.rows().len(), DEFAULT_PATTERNS.len());
        assert_eq!(table.rows()[0].field, Field::MGrav);
        assert!(table.rows()[0].regex.is_match("M_ADM = 2.1"));
    }

    #[test]
    fn test_override_appends_new_field() {
        let table = PatternTable::default_table()
            .unwrap()
            .with_overrides(&[over("M_TOV", r"TOV mass.*?:\s*([\d.]+)")])
            .unwrap();
        assert_eq!(table.rows().len(), DEFAULT_PATTERNS.len() + 1);
        assert_eq!(table.rows().last().unwrap().field, Field::MTov);
    }

    #[test]
    fn test_override_rejects_derived_field() {
        let err = PatternTable::default_table()
            .unwrap()
            .with_overrides(&[over("R_polar", r"R_p\s*=\s*([\d.]+)")])
            .unwrap_err();
        assert!(matches!(err, ExtractorError::InvalidPattern { .. }));
    }

    #[test]
    fn test_override_rejects_wrong_group_count() {
        let none = compile(Field::FMax, r"f_max\s*=\s*[\d.]+", None);
        let two = compile(Field::FMax, r"(f_max)\s*=\s*([\d.]+)", None);
        assert!(none.is_err());
        assert!(two.is_err());
    }

    #[test]
    fn test_override_rejects_bad_regex() {
        let err = compile(Field::FMax, r"f_max\s*=\s*([\d.]+", None).unwrap_err();
        match err {
            ExtractorError::InvalidPattern { field, .. } => assert_eq!(field, "f_max"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_override_rejects_unknown_field() {
        let err = PatternTable::default_table()
            .unwrap()
            .with_overrides(&[over("radius", r"r\s*=\s*([\d.]+)")])
            .unwrap_err();
        assert!(matches!(err, ExtractorError::Config(_)));
    }
}
