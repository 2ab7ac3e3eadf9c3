#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tenantenv
//!
//! Resolves the environment configuration of a storage tenant.
//!
//! Each resolution starts from built-in defaults, adds values derived from
//! the tenant's topology, carries forward what was persisted last time and
//! finally applies the user's own overrides. The result is rendered as
//! deterministic `export NAME="VALUE"` text suitable for persisting and
//! comparing.
//!
//! ## Core Types
//!
//! - [`TenantTopology`] and [`Pool`]: the tenant description
//! - [`EnvVars`] and [`EnvCodec`]: the variable collection and its text form
//! - [`ConfigResolver`] and [`ResolvedConfig`]: end-to-end resolution
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use tenantenv::{resolve, Pool, TenantTopology};
//!
//! let topology = TenantTopology::new("tenant", "ns-x")
//!     .with_pool(Pool::new("pool-0", 4, 4))
//!     .with_env("TEST", "value");
//!
//! let resolved = resolve(&topology, None).unwrap();
//! assert_eq!(
//!     resolved.vars.get("S3_SERVER_URL"),
//!     Some("https://minio.ns-x.svc.cluster.local:443")
//! );
//! assert!(resolved.text.ends_with("export TEST=\"value\"\n"));
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod keys;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod topology;

// Re-export key types at crate root for convenience
pub use config::{ConfigMerger, DefaultEnv};
pub use env::{EnvCodec, EnvVar, EnvVars};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{ChangeReport, OutputFormat};
pub use resolver::{resolve, ConfigResolver, ResolvedConfig};
pub use topology::{Pool, TenantTopology, TopologyDeriver, TopologyLoader, TopologyValidator};
