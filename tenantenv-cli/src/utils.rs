//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands: loading
//! tenant descriptions and persisted text, choosing an output format and
//! writing results.

use crate::error::CliError;
use clap::ValueEnum;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tenantenv::env::EnvVars;
use tenantenv::{LogLevel, Logger, OutputFormat, TenantTopology, TopologyLoader};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Effective level after flags and `TENANTENV_LOG_MODE` were applied.
    pub log_level: LogLevel,
}

impl GlobalOptions {
    /// A logger for user-facing status messages.
    pub fn logger(&self) -> Logger {
        Logger::new(self.log_level)
    }
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormatArg {
    /// Canonical export statements
    Export,
    /// Dotenv (.env file) format
    Dotenv,
    /// JSON format
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Export => OutputFormat::Export,
            OutputFormatArg::Dotenv => OutputFormat::Dotenv,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Load a tenant description, with defaults applied.
pub fn load_tenant(path: &Path) -> Result<TenantTopology, CliError> {
    if path.exists() && !path.is_file() {
        return Err(CliError::InvalidArguments(format!(
            "Path is not a file: {}",
            path.display()
        )));
    }
    TopologyLoader::load_file(path).map_err(CliError::from)
}

/// Read previously persisted text; a missing file means no prior state.
pub fn read_prior(path: Option<&Path>) -> Result<Option<Vec<u8>>, CliError> {
    match path {
        Some(path) => TopologyLoader::read_persisted(path).map_err(CliError::from),
        None => Ok(None),
    }
}

/// Read a whole input file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(CliError::InvalidArguments(format!(
                    "File not found: {}",
                    path.display()
                )));
            }
            Ok(fs::read(path)?)
        }
        _ => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Render variables in the requested format.
pub fn format_vars(format: OutputFormatArg, vars: &EnvVars) -> Result<String, CliError> {
    let formatter = OutputFormat::from(format).create_formatter();
    formatter.format(vars).map_err(CliError::from)
}

/// Write `text` to `output`, or to stdout when no file is given.
pub fn write_output(text: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
