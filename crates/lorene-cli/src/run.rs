//! Batch loop: read the input files, extract, render, emit.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lorene_domain::NeutronStarModel;
use lorene_extractor::Extractor;
use std::fs;
use std::io::{IsTerminal, Write};
use tracing::{info, warn};

/// Run the CLI against the real stdout.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let color_enabled = config.settings.color && !cli.no_color && std::io::stdout().is_terminal();
    let formatter = Formatter::new(color_enabled);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &formatter, &mut out)
}

/// Run the batch with status lines and results going to `out`.
///
/// Missing input files are reported and skipped. When nothing is left the
/// run ends with a notice and produces no output. A capture that fails to
/// parse aborts the run.
pub fn execute<W: Write>(cli: &Cli, config: &Config, formatter: &Formatter, out: &mut W) -> Result<()> {
    let extractor = Extractor::new(&config.extractor)?;

    let mut models: Vec<NeutronStarModel> = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        if !path.exists() {
            warn!("Skipping missing input {}", path.display());
            writeln!(out, "{}", formatter.warning(&format!("File not found: {}", path.display())))?;
            continue;
        }

        let text = fs::read_to_string(path)?;
        let model = extractor
            .extract(&path.display().to_string(), &text)
            .map_err(|source| CliError::Extract {
                path: path.clone(),
                source,
            })?;
        models.push(model);
    }

    if models.is_empty() {
        writeln!(out, "{}", formatter.info("No valid files found."))?;
        return Ok(());
    }

    let mode = cli.output_mode(config.settings.format);
    info!("Rendering {} model(s) as {:?}", models.len(), mode);
    let rendered = formatter.render(mode, &models)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            writeln!(
                out,
                "{}",
                formatter.success(&format!("Output written to {}", path.display()))
            )?;
        }
        None => writeln!(out, "{}", rendered)?,
    }

    Ok(())
}
