//! Names of the variables this crate computes or defaults.
//!
//! These must match what the tenant's server process reads at startup.

/// In-cluster URL of the tenant's service endpoint.
pub const SERVER_URL: &str = "S3_SERVER_URL";

/// Space-separated node/volume expansion patterns, one per pool.
pub const ARGS: &str = "S3_ARGS";

/// Where the browser UI redirects to; only set when a console domain exists.
pub const BROWSER_REDIRECT_URL: &str = "S3_BROWSER_REDIRECT_URL";

/// Job identifier used in scrape configs.
pub const PROMETHEUS_JOB_ID: &str = "S3_PROMETHEUS_JOB_ID";

/// In-place update flag.
pub const UPDATE: &str = "S3_UPDATE";

/// Public key used to verify update signatures.
pub const UPDATE_MINISIGN_PUBKEY: &str = "S3_UPDATE_MINISIGN_PUBKEY";

/// Keys whose value is always taken from the current topology rather than
/// from persisted text.
pub const TOPOLOGY_OWNED: [&str; 3] = [SERVER_URL, ARGS, BROWSER_REDIRECT_URL];
