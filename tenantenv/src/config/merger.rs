//! Precedence merging of the configuration tiers.
//!
//! Tiers are applied lowest precedence first; a later tier replaces any
//! value an earlier one set for the same name. The one exception to plain
//! layering is handled by ordering rather than by skipping keys: after the
//! persisted tier, the topology-owned keys are written again from the fresh
//! derivation so nothing stale survives a scale-out or scale-in.

use std::fmt;

use crate::config::defaults::DefaultEnv;
use crate::env::EnvVars;
use crate::keys;
use crate::topology::DerivedEnv;

/// The source a tier of values comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Built-in defaults.
    Defaults,
    /// Values computed from the topology.
    Derived,
    /// Values read back from the previously persisted text.
    Persisted,
    /// The tenant's own `env` list.
    UserOverrides,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => write!(f, "defaults"),
            Self::Derived => write!(f, "derived"),
            Self::Persisted => write!(f, "persisted"),
            Self::UserOverrides => write!(f, "user overrides"),
        }
    }
}

/// The four inputs to a merge.
#[derive(Debug, Clone, Copy)]
pub struct MergeInputs<'a> {
    /// Tier 1.
    pub defaults: &'a DefaultEnv,
    /// Tier 2, and the source of the topology-owned keys.
    pub derived: &'a DerivedEnv,
    /// Tier 3.
    pub persisted: &'a EnvVars,
    /// Tier 4.
    pub overrides: &'a EnvVars,
}

/// Merges configuration tiers according to precedence rules.
///
/// # Examples
///
/// ```
/// use tenantenv::config::{ConfigMerger, DefaultEnv, MergeInputs};
/// use tenantenv::env::EnvVars;
/// use tenantenv::topology::{TenantTopology, TopologyDeriver};
///
/// let derived = TopologyDeriver::derive(&TenantTopology::default());
/// let persisted: EnvVars = [("S3_ARGS", "stale"), ("S3_ROOT_USER", "minio")]
///     .into_iter()
///     .collect();
/// let overrides: EnvVars = [("S3_UPDATE", "off")].into_iter().collect();
///
/// let merged = ConfigMerger::merge(MergeInputs {
///     defaults: &DefaultEnv::default(),
///     derived: &derived,
///     persisted: &persisted,
///     overrides: &overrides,
/// });
///
/// assert_eq!(merged.get("S3_ARGS"), Some(""));
/// assert_eq!(merged.get("S3_ROOT_USER"), Some("minio"));
/// assert_eq!(merged.get("S3_UPDATE"), Some("off"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge all tiers into the final collection.
    #[must_use]
    pub fn merge(inputs: MergeInputs<'_>) -> EnvVars {
        let mut result = inputs.defaults.to_vars();

        Self::merge_into(&mut result, &inputs.derived.to_vars(), Tier::Derived);
        Self::merge_into(&mut result, inputs.persisted, Tier::Persisted);
        Self::reapply_topology_owned(&mut result, inputs.derived);
        Self::merge_into(&mut result, inputs.overrides, Tier::UserOverrides);

        result
    }

    /// Merge `source` into `target` (source overwrites target).
    pub fn merge_into(target: &mut EnvVars, source: &EnvVars, tier: Tier) {
        for (name, value) in source.iter() {
            if let Some(previous) = target.set(name, value) {
                if previous != value {
                    log::debug!("{tier} replaced value of {name}");
                }
            }
        }
    }

    /// Writes the topology-owned keys again from the fresh derivation.
    ///
    /// The redirect key is removed when no console domain is configured, so
    /// its presence keeps tracking the current topology.
    fn reapply_topology_owned(target: &mut EnvVars, derived: &DerivedEnv) {
        for (name, fresh) in [
            (keys::SERVER_URL, derived.server_url.as_str()),
            (keys::ARGS, derived.args.as_str()),
        ] {
            if let Some(stale) = target.set(name, fresh) {
                if stale != fresh {
                    log::debug!("discarding persisted {name}; topology recomputed it");
                }
            }
        }

        match derived.browser_redirect_url {
            Some(ref url) => {
                target.set(keys::BROWSER_REDIRECT_URL, url.as_str());
            }
            None => {
                if target.remove(keys::BROWSER_REDIRECT_URL).is_some() {
                    log::debug!(
                        "dropping persisted {}; no console domain configured",
                        keys::BROWSER_REDIRECT_URL
                    );
                }
            }
        }
    }
}
