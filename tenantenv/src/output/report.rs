//! Human-readable summary of what a resolution changed.

use std::fmt;

use crate::resolver::ResolvedConfig;

/// Kind of change for a single name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Present before and after with a different value.
    Modified,
    /// Only present after.
    Added,
    /// Only present before.
    Removed,
}

impl ChangeKind {
    fn marker(self) -> char {
        match self {
            Self::Modified => '~',
            Self::Added => '+',
            Self::Removed => '-',
        }
    }
}

/// Lists the names a resolution changed, one per line.
///
/// # Examples
///
/// ```
/// use tenantenv::output::ChangeReport;
/// use tenantenv::{resolve, TenantTopology};
///
/// let topology = TenantTopology::default().with_env("S3_ROOT_USER", "admin");
/// let resolved = resolve(&topology, Some("export S3_ROOT_USER=\"minio\"\n")).unwrap();
/// let report = ChangeReport::new(&resolved).to_string();
///
/// assert!(report.contains("~ S3_ROOT_USER"));
/// assert!(report.contains("+ S3_ARGS"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    entries: Vec<(ChangeKind, String)>,
}

impl ChangeReport {
    /// Builds the report for a resolution; entries are sorted by name.
    #[must_use]
    pub fn new(resolved: &ResolvedConfig) -> Self {
        let entries = resolved
            .changed
            .iter()
            .map(|name| {
                let kind = match (resolved.prior().contains(name), resolved.vars.contains(name)) {
                    (true, true) => ChangeKind::Modified,
                    (false, _) => ChangeKind::Added,
                    (true, false) => ChangeKind::Removed,
                };
                (kind, name.clone())
            })
            .collect();
        Self { entries }
    }

    /// Whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries, sorted by name.
    #[must_use]
    pub fn entries(&self) -> &[(ChangeKind, String)] {
        &self.entries
    }
}

impl fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No changes.");
        }
        for (kind, name) in &self.entries {
            writeln!(f, "{} {name}", kind.marker())?;
        }
        Ok(())
    }
}
