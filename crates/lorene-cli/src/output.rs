//! Output formatting for the CLI.
//!
//! Four renderings of extracted models: a sectioned text table, a JSON
//! array, LaTeX `tabular` rows and a side-by-side comparison of two models.
//! All of them are pure functions of the records they are given.

use crate::error::Result;
use colored::*;
use lorene_domain::{Field, NeutronStarModel};
use serde::{Deserialize, Serialize};

/// Output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Sectioned text table per model
    Table,
    /// JSON array of flat objects
    Json,
    /// One LaTeX tabular row per model
    Latex,
    /// Comparison of the first two models
    Compare,
}

/// Properties shown in a comparison, in display order.
pub const COMPARED_PROPERTIES: [(&str, Field); 8] = [
    ("λ₁", Field::Lambda1),
    ("M_grav [M_sun]", Field::MGrav),
    ("M_bary [M_sun]", Field::MBary),
    ("R_circ [km]", Field::RCirc),
    ("Axis ratio", Field::AxisRatio),
    ("f_c [Hz]", Field::FCentral),
    ("T/|W|", Field::TW),
    ("GRV2 [%]", Field::Grv2),
];

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Render models in the given mode.
    ///
    /// `Compare` needs two models; with fewer it renders tables instead.
    /// Models past the second are not compared.
    pub fn render(&self, mode: OutputMode, models: &[NeutronStarModel]) -> Result<String> {
        match mode {
            OutputMode::Json => format_json(models),
            OutputMode::Latex => Ok(models.iter().map(format_latex).collect::<Vec<_>>().join("\n")),
            OutputMode::Compare if models.len() >= 2 => Ok(format_comparison(&models[0], &models[1])),
            OutputMode::Compare | OutputMode::Table => {
                Ok(models.iter().map(format_table).collect::<Vec<_>>().join("\n\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(message, "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("Warning: {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Format a model as a sectioned text table.
pub fn format_table(model: &NeutronStarModel) -> String {
    let v = |field| model.value(field);
    let rule = "=".repeat(60);
    let underline = "-".repeat(40);

    let lines = [
        rule.clone(),
        format!("LORENE Neutron Star Model: {}", model.filename),
        rule.clone(),
        String::new(),
        "MASS QUANTITIES".to_string(),
        underline.clone(),
        format!("  Gravitational mass:  {:.4} M_sun", v(Field::MGrav)),
        format!("  Baryonic mass:       {:.4} M_sun", v(Field::MBary)),
        format!("  Binding energy:      {:.4} M_sun", v(Field::MBinding)),
        String::new(),
        "GEOMETRY".to_string(),
        underline.clone(),
        format!("  Equatorial radius:   {:.2} km", v(Field::RCirc)),
        format!("  Polar radius:        {:.2} km", v(Field::RPolar)),
        format!("  Axis ratio (r_p/r_eq): {:.3}", v(Field::AxisRatio)),
        String::new(),
        "ROTATION".to_string(),
        underline.clone(),
        format!("  Central frequency:   {:.1} Hz", v(Field::FCentral)),
        format!("  Equatorial freq.:    {:.1} Hz", v(Field::FEquatorial)),
        format!("  λ₁:                  {:.2}", v(Field::Lambda1)),
        format!("  λ₂:                  {:.2}", v(Field::Lambda2)),
        String::new(),
        "STABILITY".to_string(),
        underline,
        format!("  T/|W|:               {:.4}", v(Field::TW)),
        format!("  GRV2:                {:.2}%", v(Field::Grv2)),
        format!("  GRV3:                {:.2}%", v(Field::Grv3)),
        String::new(),
        rule,
    ];
    lines.join("\n")
}

/// Format models as a pretty-printed JSON array.
pub fn format_json(models: &[NeutronStarModel]) -> Result<String> {
    Ok(serde_json::to_string_pretty(models)?)
}

/// Format a model as one LaTeX table row.
pub fn format_latex(model: &NeutronStarModel) -> String {
    let v = |field| model.value(field);
    format!(
        "{:.1} & {:.2} & {:.2} & {:.2} & {:.3} & {:.0} & {:.3} & {:.2} \\\\",
        v(Field::Lambda1),
        v(Field::MGrav),
        v(Field::MBary),
        v(Field::RCirc),
        v(Field::AxisRatio),
        v(Field::FCentral),
        v(Field::TW),
        v(Field::Grv2),
    )
}

/// Relative change from `v1` to `v2` in percent, 0 when `v1` is zero.
pub fn percent_difference(v1: f64, v2: f64) -> f64 {
    if v1 == 0.0 {
        return 0.0;
    }
    100.0 * (v2 - v1) / v1
}

/// Format a side-by-side comparison of two models.
pub fn format_comparison(model1: &NeutronStarModel, model2: &NeutronStarModel) -> String {
    let rule = "=".repeat(70);
    let mut lines = vec![
        rule.clone(),
        "MODEL COMPARISON".to_string(),
        rule.clone(),
        String::new(),
        format!("{:<25} {:>15} {:>15} {:>12}", "Property", "Model 1", "Model 2", "Diff"),
        "-".repeat(70),
    ];

    for (name, field) in COMPARED_PROPERTIES {
        let v1 = model1.value(field);
        let v2 = model2.value(field);
        let pct = percent_difference(v1, v2);
        lines.push(format!("{:<25} {:>15.4} {:>15.4} {:>+10.2}%", name, v1, v2, pct));
    }

    lines.push(rule);
    lines.join("\n")
}
