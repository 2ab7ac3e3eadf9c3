//! Tenant topology definitions.
//!
//! A [`TenantTopology`] is the read-only snapshot of a tenant that
//! resolution needs: identity, pools, optional console domain and the
//! user's own environment overrides.

use serde::{Deserialize, Serialize};

use crate::env::{EnvVar, EnvVars};

/// The parts of a tenant description that feed configuration resolution.
///
/// # Examples
///
/// ```
/// use tenantenv::topology::{Pool, TenantTopology};
///
/// let topology = TenantTopology::new("tenant", "ns-x")
///     .with_pool(Pool::new("pool-0", 4, 4))
///     .with_console_domain("http://console.minio")
///     .with_env("TEST", "value");
///
/// assert_eq!(topology.pools.len(), 1);
/// assert_eq!(topology.console_domain(), Some("http://console.minio"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TenantTopology {
    /// Tenant name; may be empty.
    #[serde(default)]
    pub name: String,

    /// Namespace the tenant lives in; may be empty.
    #[serde(default)]
    pub namespace: String,

    /// Pool definitions, in declaration order. May be empty.
    #[serde(default)]
    pub pools: Vec<Pool>,

    /// Console/browser domain, if one is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_domain: Option<String>,

    /// User-declared environment overrides, in declaration order.
    #[serde(default)]
    pub env: Vec<EnvVar>,
}

/// A homogeneous group of storage servers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Pool {
    /// Pool name; defaulted to `pool-<index>` when empty.
    #[serde(default)]
    pub name: String,

    /// Number of servers in the pool.
    #[serde(default)]
    pub servers: u32,

    /// Number of volumes attached to each server.
    #[serde(default)]
    pub volumes_per_server: u32,
}

impl Pool {
    /// Creates a pool definition.
    pub fn new(name: impl Into<String>, servers: u32, volumes_per_server: u32) -> Self {
        Self {
            name: name.into(),
            servers,
            volumes_per_server,
        }
    }
}

impl TenantTopology {
    /// Creates a topology with no pools, domain or overrides.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Appends a pool.
    #[must_use]
    pub fn with_pool(mut self, pool: Pool) -> Self {
        self.pools.push(pool);
        self
    }

    /// Sets the console domain.
    #[must_use]
    pub fn with_console_domain(mut self, domain: impl Into<String>) -> Self {
        self.console_domain = Some(domain.into());
        self
    }

    /// Appends a user environment override.
    #[must_use]
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push(EnvVar::new(name, value));
        self
    }

    /// The console domain, if it is set and non-empty.
    #[must_use]
    pub fn console_domain(&self) -> Option<&str> {
        self.console_domain
            .as_deref()
            .filter(|domain| !domain.is_empty())
    }

    /// The user overrides as a collection; later duplicates win.
    #[must_use]
    pub fn user_env(&self) -> EnvVars {
        self.env.iter().cloned().collect()
    }

    /// Applies the defaulting rules in place.
    ///
    /// - pools without a name become `pool-<index>`
    /// - an empty console domain becomes absent; any other value, including
    ///   whitespace, is kept as written
    pub fn ensure_defaults(&mut self) {
        for (idx, pool) in self.pools.iter_mut().enumerate() {
            if pool.name.is_empty() {
                pool.name = format!("pool-{idx}");
            }
        }

        if self
            .console_domain
            .as_deref()
            .is_some_and(str::is_empty)
        {
            self.console_domain = None;
        }
    }

    /// Returns a defaulted copy, leaving `self` untouched.
    #[must_use]
    pub fn with_defaults(&self) -> Self {
        let mut defaulted = self.clone();
        defaulted.ensure_defaults();
        defaulted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_defaults_names_unnamed_pools() {
        let mut topology = TenantTopology::new("t", "ns")
            .with_pool(Pool::new("", 4, 4))
            .with_pool(Pool::new("fast", 2, 2))
            .with_pool(Pool::new("", 1, 1));
        topology.ensure_defaults();

        let names: Vec<_> = topology.pools.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["pool-0", "fast", "pool-2"]);
    }

    #[test]
    fn test_ensure_defaults_clears_empty_domain() {
        let mut topology = TenantTopology::default().with_console_domain("");
        topology.ensure_defaults();
        assert_eq!(topology.console_domain, None);
    }

    #[test]
    fn test_ensure_defaults_keeps_whitespace_domain() {
        let mut topology = TenantTopology::default().with_console_domain("  ");
        topology.ensure_defaults();
        assert_eq!(topology.console_domain.as_deref(), Some("  "));
        assert_eq!(topology.console_domain(), Some("  "));
    }

    #[test]
    fn test_console_domain_hides_empty_string() {
        let topology = TenantTopology::default().with_console_domain("");
        assert_eq!(topology.console_domain(), None);
    }

    #[test]
    fn test_with_defaults_does_not_mutate_original() {
        let topology = TenantTopology::default().with_pool(Pool::new("", 1, 1));
        let defaulted = topology.with_defaults();
        assert_eq!(topology.pools[0].name, "");
        assert_eq!(defaulted.pools[0].name, "pool-0");
    }

    #[test]
    fn test_user_env_last_duplicate_wins() {
        let topology = TenantTopology::default()
            .with_env("TEST", "one")
            .with_env("TEST", "two");
        assert_eq!(topology.user_env().get("TEST"), Some("two"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let yaml = "name: tenant\n\
                    namespace: ns-x\n\
                    pools:\n\
                    \x20 - name: pool-0\n\
                    \x20   servers: 4\n\
                    \x20   volumesPerServer: 4\n\
                    consoleDomain: http://console.minio\n\
                    env:\n\
                    \x20 - name: TEST\n\
                    \x20   value: value\n";
        let topology: TenantTopology = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            topology,
            TenantTopology::new("tenant", "ns-x")
                .with_pool(Pool::new("pool-0", 4, 4))
                .with_console_domain("http://console.minio")
                .with_env("TEST", "value")
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<TenantTopology, _> = serde_yaml::from_str("replicas: 3\n");
        assert!(result.is_err());
    }
}
