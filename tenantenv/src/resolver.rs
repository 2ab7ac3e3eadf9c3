//! End-to-end resolution of a tenant's environment configuration.
//!
//! [`ConfigResolver`] checks the user overrides, derives the topology-owned
//! values, merges all tiers, renders the canonical text and works out which
//! names differ from the previously persisted text. It performs no I/O:
//! reading the prior text and storing the new one is up to the caller.

use std::collections::BTreeSet;

use crate::config::{ConfigMerger, DefaultEnv, MergeInputs};
use crate::env::{EnvCodec, EnvVars};
use crate::error::Result;
use crate::topology::{TenantTopology, TopologyDeriver, TopologyValidator};

/// The outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Canonical export text, ready to persist.
    pub text: String,
    /// The final name/value pairs.
    pub vars: EnvVars,
    /// Names whose value differs from the prior text, including names
    /// present on only one side.
    pub changed: BTreeSet<String>,
    prior: EnvVars,
}

impl ResolvedConfig {
    /// Whether the result is identical to the prior persisted content.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }

    /// Names that are new compared to the prior text.
    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.changed
            .iter()
            .map(String::as_str)
            .filter(|name| !self.prior.contains(name))
    }

    /// Names that were in the prior text but are no longer rendered.
    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.changed
            .iter()
            .map(String::as_str)
            .filter(|name| !self.vars.contains(name))
    }

    /// Names present on both sides with different values.
    pub fn modified(&self) -> impl Iterator<Item = &str> {
        self.changed
            .iter()
            .map(String::as_str)
            .filter(|name| self.prior.contains(name) && self.vars.contains(name))
    }

    /// The prior persisted values, as parsed.
    #[must_use]
    pub fn prior(&self) -> &EnvVars {
        &self.prior
    }
}

/// Resolves tenant configurations.
///
/// # Examples
///
/// ```
/// use tenantenv::{ConfigResolver, TenantTopology};
///
/// let topology = TenantTopology::default().with_env("TEST", "value");
/// let resolved = ConfigResolver::new()
///     .resolve(&topology, Some("export S3_ROOT_USER=\"minio\"\n"))
///     .unwrap();
///
/// assert!(resolved.text.starts_with("export S3_ARGS=\"\"\n"));
/// assert_eq!(resolved.vars.get("S3_ROOT_USER"), Some("minio"));
/// assert!(resolved.changed.contains("TEST"));
/// assert!(!resolved.changed.contains("S3_ROOT_USER"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    defaults: DefaultEnv,
}

impl ConfigResolver {
    /// A resolver using the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver using a custom defaults tier.
    #[must_use]
    pub fn with_defaults(defaults: DefaultEnv) -> Self {
        Self { defaults }
    }

    /// Resolve the configuration for `topology` given the prior text.
    ///
    /// `None` or an empty string means there is no prior state. Lines of the
    /// prior text that cannot be read are ignored.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if a user override name cannot be
    /// rendered (see [`TopologyValidator::validate_overrides`]). Pool shapes
    /// are rendered as declared. No partial result is produced.
    pub fn resolve(&self, topology: &TenantTopology, prior: Option<&str>) -> Result<ResolvedConfig> {
        let parsed = EnvCodec::parse_with_report(prior.unwrap_or_default());
        if !parsed.is_clean() {
            log::warn!(
                "ignored {} unreadable line(s) in persisted configuration",
                parsed.skipped_lines.len()
            );
        }
        self.resolve_parsed(topology, parsed.vars)
    }

    /// Like [`ConfigResolver::resolve`], for raw persisted bytes.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigResolver::resolve`].
    pub fn resolve_bytes(
        &self,
        topology: &TenantTopology,
        prior: Option<&[u8]>,
    ) -> Result<ResolvedConfig> {
        match prior {
            Some(bytes) => {
                let text = String::from_utf8_lossy(bytes);
                self.resolve(topology, Some(text.as_ref()))
            }
            None => self.resolve(topology, None),
        }
    }

    fn resolve_parsed(&self, topology: &TenantTopology, prior: EnvVars) -> Result<ResolvedConfig> {
        let topology = topology.with_defaults();
        TopologyValidator::validate_overrides(&topology)?;

        let derived = TopologyDeriver::derive(&topology);
        let vars = ConfigMerger::merge(MergeInputs {
            defaults: &self.defaults,
            derived: &derived,
            persisted: &prior,
            overrides: &topology.user_env(),
        });
        let text = EnvCodec::serialize(&vars);
        let changed = changed_names(&prior, &vars);

        log::debug!(
            "resolved {} variable(s) for tenant '{}', {} changed",
            vars.len(),
            topology.name,
            changed.len()
        );

        Ok(ResolvedConfig {
            text,
            vars,
            changed,
            prior,
        })
    }
}

/// Resolve with the built-in defaults.
///
/// # Errors
///
/// Same as [`ConfigResolver::resolve`].
pub fn resolve(topology: &TenantTopology, prior: Option<&str>) -> Result<ResolvedConfig> {
    ConfigResolver::new().resolve(topology, prior)
}

fn changed_names(prior: &EnvVars, current: &EnvVars) -> BTreeSet<String> {
    prior
        .names()
        .chain(current.names())
        .filter(|name| prior.get(name) != current.get(name))
        .map(str::to_string)
        .collect()
}
