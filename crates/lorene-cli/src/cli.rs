//! CLI argument parsing.

use crate::output::OutputMode;
use clap::Parser;
use std::path::PathBuf;

/// Parse LORENE nrotdiff output files.
#[derive(Debug, Parser)]
#[command(name = "lorene-parse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to resu.d file(s)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output as LaTeX table rows
    #[arg(long)]
    pub latex: bool,

    /// Compare the first two models
    #[arg(long)]
    pub compare: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "LORENE_PARSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Resolve the mode flags to a single output mode.
    ///
    /// `--json` beats `--latex`, which beats `--compare`; with no flag the
    /// configured default applies.
    pub fn output_mode(&self, default: OutputMode) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.latex {
            OutputMode::Latex
        } else if self.compare {
            OutputMode::Compare
        } else {
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_are_required() {
        assert!(Cli::try_parse_from(["lorene-parse"]).is_err());
    }

    #[test]
    fn test_multiple_files() {
        let cli = Cli::parse_from(["lorene-parse", "a.d", "b.d"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.d"), PathBuf::from("b.d")]);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_output_flag() {
        let cli = Cli::parse_from(["lorene-parse", "a.d", "-o", "out.txt"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        let cli = Cli::parse_from(["lorene-parse", "--output", "out.txt", "a.d"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_default_mode() {
        let cli = Cli::parse_from(["lorene-parse", "a.d"]);
        assert_eq!(cli.output_mode(OutputMode::Table), OutputMode::Table);
        assert_eq!(cli.output_mode(OutputMode::Latex), OutputMode::Latex);
    }

    #[test]
    fn test_mode_precedence() {
        let cli = Cli::parse_from(["lorene-parse", "a.d", "--compare", "--latex", "--json"]);
        assert_eq!(cli.output_mode(OutputMode::Table), OutputMode::Json);

        let cli = Cli::parse_from(["lorene-parse", "a.d", "--compare", "--latex"]);
        assert_eq!(cli.output_mode(OutputMode::Table), OutputMode::Latex);

        let cli = Cli::parse_from(["lorene-parse", "a.d", "--compare"]);
        assert_eq!(cli.output_mode(OutputMode::Json), OutputMode::Compare);
    }
}
