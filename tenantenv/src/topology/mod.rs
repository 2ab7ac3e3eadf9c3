//! Tenant topology: its description, defaulting, validation, and the
//! values derived from it.
//!
//! # Examples
//!
//! ```
//! use tenantenv::topology::{Pool, TenantTopology, TopologyDeriver, TopologyValidator};
//!
//! let topology = TenantTopology::new("tenant", "ns-x")
//!     .with_pool(Pool::new("", 4, 4))
//!     .with_defaults();
//! TopologyValidator::validate(&topology).unwrap();
//!
//! let derived = TopologyDeriver::derive(&topology);
//! assert!(derived.args.starts_with("https://tenant-pool-0-{0...3}"));
//! ```

pub mod deriver;
pub mod loader;
pub mod schema;
pub mod validator;

pub use deriver::{DerivedEnv, TopologyDeriver};
pub use loader::TopologyLoader;
pub use schema::{Pool, TenantTopology};
pub use validator::TopologyValidator;
