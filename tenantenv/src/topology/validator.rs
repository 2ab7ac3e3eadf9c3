//! Structural checks on tenant topologies.
//!
//! Missing values are fine (they have documented fallbacks). Resolution only
//! rejects overrides that cannot be rendered as a sourceable line; the full
//! pool checks back the `validate` command.

use std::collections::HashSet;

use crate::env::is_valid_name;
use crate::error::{Error, Result};
use crate::topology::schema::TenantTopology;

/// Validates a [`TenantTopology`] before resolution.
///
/// # Examples
///
/// ```
/// use tenantenv::topology::{Pool, TenantTopology, TopologyValidator};
///
/// TopologyValidator::validate(&TenantTopology::default()).unwrap();
///
/// let bad = TenantTopology::default().with_pool(Pool::new("pool-0", 0, 4));
/// assert!(TopologyValidator::validate(&bad).is_err());
/// ```
pub struct TopologyValidator;

impl TopologyValidator {
    /// Validate a topology.
    ///
    /// Expects defaults to have been applied already, so empty pool names
    /// are reported as errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an override name that is not a
    /// shell identifier, or a pool with zero servers or volumes, and
    /// [`Error::Validation`] for missing or duplicated pool names.
    pub fn validate(topology: &TenantTopology) -> Result<()> {
        Self::validate_pools(topology)?;
        Self::validate_overrides(topology)?;
        Ok(())
    }

    fn validate_pools(topology: &TenantTopology) -> Result<()> {
        let mut seen = HashSet::new();

        for (idx, pool) in topology.pools.iter().enumerate() {
            if pool.name.is_empty() {
                return Err(Error::Validation {
                    field: format!("pools[{idx}].name"),
                    message: "Pool name cannot be empty".into(),
                });
            }

            if !seen.insert(pool.name.as_str()) {
                return Err(Error::Validation {
                    field: format!("pools[{idx}].name"),
                    message: format!("Duplicate pool name '{}'", pool.name),
                });
            }

            if pool.servers == 0 {
                return Err(Error::InvalidInput {
                    field: format!("pools[{idx}].servers"),
                    reason: "must be greater than 0".into(),
                });
            }

            if pool.volumes_per_server == 0 {
                return Err(Error::InvalidInput {
                    field: format!("pools[{idx}].volumesPerServer"),
                    reason: "must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    /// Check only the user overrides, the subset resolution requires.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an override name that is empty or
    /// not a shell identifier.
    pub fn validate_overrides(topology: &TenantTopology) -> Result<()> {
        for (idx, var) in topology.env.iter().enumerate() {
            if var.name.is_empty() {
                return Err(Error::InvalidInput {
                    field: format!("env[{idx}].name"),
                    reason: "must not be empty".into(),
                });
            }

            if !is_valid_name(&var.name) {
                return Err(Error::InvalidInput {
                    field: format!("env[{idx}].name"),
                    reason: format!(
                        "'{}' is not a valid variable name: must start with a letter or underscore and contain only alphanumeric characters and underscores",
                        var.name
                    ),
                });
            }
        }

        Ok(())
    }
}
