//! Built-in default values, the lowest precedence tier.

use crate::env::EnvVars;
use crate::keys;

/// Default scrape job identifier.
pub const DEFAULT_PROMETHEUS_JOB_ID: &str = "minio-job";

/// Default in-place update flag.
pub const DEFAULT_UPDATE: &str = "on";

/// Default public key for verifying update signatures.
pub const DEFAULT_UPDATE_MINISIGN_PUBKEY: &str =
    "RWTx5Zr1tiHQLwG9keckT0c45M3AGeHD6IvimQHpyRywVWGbP1aVSGav";

/// The built-in defaults tier.
///
/// Built fresh for every resolution; nothing in the crate keeps a mutable
/// global copy.
///
/// # Examples
///
/// ```
/// use tenantenv::config::DefaultEnv;
///
/// let vars = DefaultEnv::default().to_vars();
/// assert_eq!(vars.get("S3_UPDATE"), Some("on"));
/// assert_eq!(vars.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultEnv {
    /// Value for [`keys::PROMETHEUS_JOB_ID`].
    pub prometheus_job_id: String,
    /// Value for [`keys::UPDATE`].
    pub update: String,
    /// Value for [`keys::UPDATE_MINISIGN_PUBKEY`].
    pub update_minisign_pubkey: String,
}

impl Default for DefaultEnv {
    fn default() -> Self {
        Self {
            prometheus_job_id: DEFAULT_PROMETHEUS_JOB_ID.to_string(),
            update: DEFAULT_UPDATE.to_string(),
            update_minisign_pubkey: DEFAULT_UPDATE_MINISIGN_PUBKEY.to_string(),
        }
    }
}

impl DefaultEnv {
    /// The defaults as a collection.
    #[must_use]
    pub fn to_vars(&self) -> EnvVars {
        let mut vars = EnvVars::new();
        vars.set(keys::PROMETHEUS_JOB_ID, self.prometheus_job_id.as_str());
        vars.set(keys::UPDATE, self.update.as_str());
        vars.set(keys::UPDATE_MINISIGN_PUBKEY, self.update_minisign_pubkey.as_str());
        vars
    }
}
