//! Output formatting for resolved configurations.
//!
//! The canonical export text is what gets persisted; the other formats are
//! for people and tooling that want the same values in a different shape.

mod formatters;
mod report;

use crate::env::EnvVars;
use crate::{Error, Result};

pub use formatters::{DotenvFormatter, ExportFormatter, JsonFormatter};
pub use report::{ChangeKind, ChangeReport};

/// Trait for rendering a collection of variables.
pub trait OutputFormatter {
    /// Format the given variables into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    fn format(&self, vars: &EnvVars) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Canonical `export NAME="VALUE"` statements.
    #[default]
    Export,
    /// Dotenv (`NAME="VALUE"`) lines.
    Dotenv,
    /// A pretty-printed JSON object.
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown names.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenantenv::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_string("JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_string("yaml").is_err());
    /// ```
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "export" | "sh" => Ok(Self::Export),
            "dotenv" | "env" => Ok(Self::Dotenv),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "format".to_string(),
                message: format!(
                    "unknown output format '{s}': supported formats are export, dotenv, json"
                ),
            }),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Export => Box::new(ExportFormatter),
            Self::Dotenv => Box::new(DotenvFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
