//! Named environment values and name-unique collections of them.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Returns true when `name` can appear on the left of a shell assignment.
///
/// Valid names start with a letter or underscore and contain only ASCII
/// letters, digits and underscores.
///
/// # Examples
///
/// ```
/// use tenantenv::env::is_valid_name;
///
/// assert!(is_valid_name("S3_ROOT_USER"));
/// assert!(is_valid_name("_PRIVATE"));
/// assert!(!is_valid_name("9LIVES"));
/// assert!(!is_valid_name("WITH-DASH"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// A single named string value, as declared in a tenant's `env` list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvVar {
    /// Variable name.
    pub name: String,

    /// Variable value; may be empty.
    #[serde(default)]
    pub value: String,
}

impl EnvVar {
    /// Creates a new variable.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A name-unique collection of environment values.
///
/// Setting an existing name replaces its value, so applying sources in
/// precedence order leaves the last writer in place. Iteration is always in
/// ascending byte order of the name, which is the order the canonical
/// rendering uses.
///
/// # Examples
///
/// ```
/// use tenantenv::env::EnvVars;
///
/// let mut vars = EnvVars::new();
/// vars.set("B", "1");
/// vars.set("A", "2");
/// vars.set("B", "3");
///
/// let names: Vec<_> = vars.names().collect();
/// assert_eq!(names, ["A", "B"]);
/// assert_eq!(vars.get("B"), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvVars {
    entries: BTreeMap<String, String>,
}

impl EnvVars {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, returning the value it replaced.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    /// Removes `name`, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    /// Looks up the value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies every entry of `other` on top of this collection.
    pub fn overlay(&mut self, other: &EnvVars) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }

    /// Iterates over `(name, value)` pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The sequence view: one [`EnvVar`] per entry, sorted by name.
    #[must_use]
    pub fn to_vec(&self) -> Vec<EnvVar> {
        self.iter().map(|(name, value)| EnvVar::new(name, value)).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        vars.extend(iter);
        vars
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for EnvVars {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl FromIterator<EnvVar> for EnvVars {
    fn from_iter<I: IntoIterator<Item = EnvVar>>(iter: I) -> Self {
        iter.into_iter().map(|var| (var.name, var.value)).collect()
    }
}

impl IntoIterator for EnvVars {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
