//! Values computed from a tenant's topology.

use crate::env::EnvVars;
use crate::keys;
use crate::topology::schema::{Pool, TenantTopology};

/// Host name of the tenant's in-cluster service.
pub const SERVICE_HOST: &str = "minio";

/// Port the tenant's service listens on.
pub const SERVICE_PORT: u16 = 443;

/// Cluster DNS suffix.
pub const CLUSTER_DOMAIN: &str = "cluster.local";

/// Suffix of the per-tenant headless service.
pub const HEADLESS_SUFFIX: &str = "-hl";

/// Mount path prefix of each server volume.
pub const VOLUME_PATH_PREFIX: &str = "/export";

/// Topology-derived values for one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedEnv {
    /// Value for [`keys::SERVER_URL`].
    pub server_url: String,
    /// Value for [`keys::ARGS`]; empty when there are no pools.
    pub args: String,
    /// Value for [`keys::BROWSER_REDIRECT_URL`], only with a console domain.
    pub browser_redirect_url: Option<String>,
}

impl DerivedEnv {
    /// All derived entries as a collection.
    #[must_use]
    pub fn to_vars(&self) -> EnvVars {
        let mut vars = EnvVars::new();
        vars.set(keys::SERVER_URL, self.server_url.as_str());
        vars.set(keys::ARGS, self.args.as_str());
        if let Some(ref url) = self.browser_redirect_url {
            vars.set(keys::BROWSER_REDIRECT_URL, url.as_str());
        }
        vars
    }
}

/// Computes environment values from a [`TenantTopology`].
///
/// # Examples
///
/// ```
/// use tenantenv::topology::{Pool, TenantTopology, TopologyDeriver};
///
/// let topology = TenantTopology::new("tenant", "ns-x").with_pool(Pool::new("pool-0", 4, 4));
/// let derived = TopologyDeriver::derive(&topology);
///
/// assert_eq!(derived.server_url, "https://minio.ns-x.svc.cluster.local:443");
/// assert_eq!(
///     derived.args,
///     "https://tenant-pool-0-{0...3}.tenant-hl.ns-x.svc.cluster.local/export{0...3}"
/// );
/// assert_eq!(derived.browser_redirect_url, None);
/// ```
pub struct TopologyDeriver;

impl TopologyDeriver {
    /// Derives every topology-dependent value.
    #[must_use]
    pub fn derive(topology: &TenantTopology) -> DerivedEnv {
        DerivedEnv {
            server_url: Self::server_url(&topology.namespace),
            args: Self::args(topology),
            browser_redirect_url: topology.console_domain().map(str::to_string),
        }
    }

    /// The service URL for a namespace.
    ///
    /// An empty namespace is not special-cased and yields two adjacent dots.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenantenv::topology::TopologyDeriver;
    ///
    /// assert_eq!(
    ///     TopologyDeriver::server_url(""),
    ///     "https://minio..svc.cluster.local:443"
    /// );
    /// ```
    #[must_use]
    pub fn server_url(namespace: &str) -> String {
        format!("https://{SERVICE_HOST}.{namespace}.svc.{CLUSTER_DOMAIN}:{SERVICE_PORT}")
    }

    /// The argument string: one expansion pattern per pool, space separated.
    #[must_use]
    pub fn args(topology: &TenantTopology) -> String {
        topology
            .pools
            .iter()
            .map(|pool| Self::pool_args(&topology.name, &topology.namespace, pool))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The expansion pattern for a single pool.
    ///
    /// Ranges use the server's `{0...N}` ellipsis notation, inclusive on both
    /// ends.
    #[must_use]
    pub fn pool_args(tenant: &str, namespace: &str, pool: &Pool) -> String {
        format!(
            "https://{tenant}-{pool_name}-{servers}.{tenant}{HEADLESS_SUFFIX}.{namespace}.svc.{CLUSTER_DOMAIN}{VOLUME_PATH_PREFIX}{volumes}",
            pool_name = pool.name,
            servers = ellipsis(pool.servers),
            volumes = ellipsis(pool.volumes_per_server),
        )
    }
}

/// `{0...count-1}`, so a zero count renders `{0...-1}`.
fn ellipsis(count: u32) -> String {
    format!("{{0...{}}}", i64::from(count) - 1)
}
