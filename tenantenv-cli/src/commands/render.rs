//! Render command implementation.
//!
//! Resolves a tenant description against previously persisted text and
//! prints the result, or writes it to a file ready to be persisted.

use crate::error::CliError;
use crate::utils::{
    format_vars, load_tenant, read_prior, write_output, GlobalOptions, OutputFormatArg,
};
use clap::Args;
use std::path::PathBuf;
use tenantenv::ConfigResolver;

/// Resolve a tenant's configuration and print it.
#[derive(Args)]
pub struct RenderCommand {
    /// Tenant description (YAML)
    #[arg(long, value_name = "FILE", env = "TENANTENV_TENANT")]
    pub tenant: PathBuf,

    /// Previously persisted export text (missing file means none)
    #[arg(long, value_name = "FILE", env = "TENANTENV_PRIOR")]
    pub prior: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "export",
        env = "TENANTENV_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormatArg,

    /// Write to this file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    /// Execute the render command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();

        // 1. Load inputs
        let topology = load_tenant(&self.tenant)?;
        let prior = read_prior(self.prior.as_deref())?;

        // 2. Resolve
        let resolved = ConfigResolver::new().resolve_bytes(&topology, prior.as_deref())?;
        if resolved.is_unchanged() {
            logger.info("configuration unchanged");
        } else {
            logger.info(&format!("{} variable(s) changed", resolved.changed.len()));
            for name in &resolved.changed {
                logger.debug(&format!("changed: {name}"));
            }
        }

        // 3. Format and emit
        let rendered = format_vars(self.format, &resolved.vars)?;
        write_output(&rendered, self.output.as_deref())?;

        if let Some(path) = &self.output {
            if !global.quiet {
                eprintln!(
                    "Wrote {} variable(s) to {}",
                    resolved.vars.len(),
                    path.display()
                );
            }
        }

        Ok(())
    }
}
