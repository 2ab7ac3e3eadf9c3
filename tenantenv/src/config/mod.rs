//! Precedence merging of configuration tiers.
//!
//! Configuration is merged from four tiers with the following precedence
//! (highest to lowest):
//!
//! 1. User overrides (the tenant's `env` list)
//! 2. Previously persisted values, except the topology-owned keys
//! 3. Values derived from the topology
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use tenantenv::config::{ConfigMerger, DefaultEnv, MergeInputs};
//! use tenantenv::env::EnvVars;
//! use tenantenv::topology::{TenantTopology, TopologyDeriver};
//!
//! let topology = TenantTopology::default().with_env("S3_PROMETHEUS_JOB_ID", "custom");
//! let merged = ConfigMerger::merge(MergeInputs {
//!     defaults: &DefaultEnv::default(),
//!     derived: &TopologyDeriver::derive(&topology),
//!     persisted: &EnvVars::new(),
//!     overrides: &topology.user_env(),
//! });
//!
//! assert_eq!(merged.get("S3_PROMETHEUS_JOB_ID"), Some("custom"));
//! ```

pub mod defaults;
pub mod merger;

#[cfg(test)]
mod proptests;

pub use defaults::DefaultEnv;
pub use merger::{ConfigMerger, MergeInputs, Tier};
