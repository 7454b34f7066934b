//! lorene-parse CLI library.
//!
//! Argument parsing, configuration, output formatting and the batch loop
//! behind the `lorene-parse` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod run;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::{Formatter, OutputMode};
pub use run::{execute, run};
