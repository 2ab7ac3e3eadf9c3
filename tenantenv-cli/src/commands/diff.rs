//! Diff command implementation.

use crate::error::CliError;
use crate::utils::{load_tenant, read_prior, write_output, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use tenantenv::{ChangeReport, ConfigResolver};

/// Show which variables a resolution would change.
#[derive(Args)]
pub struct DiffCommand {
    /// Tenant description (YAML)
    #[arg(long, value_name = "FILE", env = "TENANTENV_TENANT")]
    pub tenant: PathBuf,

    /// Previously persisted export text (missing file means none)
    #[arg(long, value_name = "FILE", env = "TENANTENV_PRIOR")]
    pub prior: Option<PathBuf>,

    /// Exit with status 1 when anything changed
    #[arg(long)]
    pub exit_code: bool,
}

impl DiffCommand {
    /// Execute the diff command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let topology = load_tenant(&self.tenant)?;
        let prior = read_prior(self.prior.as_deref())?;
        let resolved = ConfigResolver::new().resolve_bytes(&topology, prior.as_deref())?;

        let report = ChangeReport::new(&resolved);
        write_output(&report.to_string(), None)?;

        if self.exit_code && !report.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "{} variable(s) changed",
                report.entries().len()
            )));
        }

        Ok(())
    }
}
