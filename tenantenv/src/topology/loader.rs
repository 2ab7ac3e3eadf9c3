//! Reading tenant descriptions and persisted text from disk.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::topology::schema::TenantTopology;

/// Loads tenant descriptions from YAML.
///
/// # Examples
///
/// ```
/// use tenantenv::topology::TopologyLoader;
///
/// let topology = TopologyLoader::from_yaml_str(
///     "name: tenant\npools:\n  - servers: 4\n    volumesPerServer: 2\n",
/// )
/// .unwrap();
/// assert_eq!(topology.pools[0].name, "pool-0");
/// ```
pub struct TopologyLoader;

impl TopologyLoader {
    /// Parses a YAML tenant description and applies defaults.
    ///
    /// An empty document is an empty topology.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is malformed or contains
    /// unknown fields.
    pub fn from_yaml_str(contents: &str) -> Result<TenantTopology> {
        let mut topology = if contents.trim().is_empty() {
            TenantTopology::default()
        } else {
            serde_yaml::from_str::<TenantTopology>(contents)?
        };
        topology.ensure_defaults();
        Ok(topology)
    }

    /// Loads a tenant description file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file does not exist, an I/O
    /// error if it cannot be read, or a configuration error if it cannot be
    /// parsed.
    pub fn load_file(path: &Path) -> Result<TenantTopology> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let topology = Self::from_yaml_str(&contents)?;
        log::debug!(
            "loaded tenant '{}' with {} pool(s) from {}",
            topology.name,
            topology.pools.len(),
            path.display()
        );
        Ok(topology)
    }

    /// Reads previously persisted export text.
    ///
    /// A missing file means there is no prior state and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn read_persisted(path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no persisted configuration at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
