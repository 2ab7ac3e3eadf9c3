//! Parse command implementation.
//!
//! Reads persisted export text with the same lenient rules resolution uses
//! and prints the recovered variables in the chosen format.

use crate::error::CliError;
use crate::utils::{format_vars, read_input, write_output, GlobalOptions, OutputFormatArg};
use clap::Args;
use std::path::PathBuf;
use tenantenv::EnvCodec;

/// Read persisted export text and print it in another format.
#[derive(Args)]
pub struct ParseCommand {
    /// Export text to read; stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "export",
        env = "TENANTENV_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormatArg,

    /// Fail if any line could not be read
    #[arg(long)]
    pub strict: bool,
}

impl ParseCommand {
    /// Execute the parse command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let bytes = read_input(self.file.as_deref())?;
        let parsed = EnvCodec::parse_with_report(&String::from_utf8_lossy(&bytes));

        if !parsed.is_clean() {
            let lines = parsed
                .skipped_lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            if self.strict {
                return Err(CliError::SemanticFailure(format!(
                    "Unreadable line(s): {lines}"
                )));
            }
            global
                .logger()
                .warn(&format!("skipped unreadable line(s): {lines}"));
        }

        let rendered = format_vars(self.format, &parsed.vars)?;
        write_output(&rendered, None)
    }
}
