//! Command to validate a tenant description.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use tenantenv::{TopologyLoader, TopologyValidator};

/// Validate a tenant description.
#[derive(Args)]
pub struct ValidateCommand {
    /// Tenant description to validate
    #[arg(value_name = "TENANT_PATH")]
    pub tenant_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.tenant_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.tenant_path.display()
            )));
        }

        // 2. Parse the file (defaults applied)
        let contents = std::fs::read_to_string(&self.tenant_path)?;
        let topology = match TopologyLoader::from_yaml_str(&contents) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Tenant description is invalid".to_string(),
                ));
            }
        };

        // 3. Validate
        match TopologyValidator::validate(&topology) {
            Ok(()) => {
                println!("Tenant description is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Tenant description validation failed".to_string(),
                ))
            }
        }
    }
}
