//! lorene-parse - Extract quantities from LORENE nrotdiff output files.

use clap::Parser;
use lorene_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, stdout carries the results)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = lorene_cli::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
