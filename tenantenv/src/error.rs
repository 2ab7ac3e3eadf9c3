//! Error types for the tenantenv library.
//!
//! Resolution itself is lenient: malformed persisted text and missing
//! topology fields never produce errors. The variants here cover the few
//! structural problems that make a tenant description unrenderable, plus
//! the I/O and decoding failures of the loading helpers.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a tenantenv error.
///
/// # Examples
///
/// ```
/// use tenantenv::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tenantenv library.
#[derive(Debug, Error)]
pub enum Error {
    /// Structural input that cannot be resolved at all.
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput {
        /// The offending field, e.g. `env[2].name`.
        field: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A tenant description could not be decoded.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Rendering to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A referenced file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },
}

impl Error {
    /// Check if the error was caused by the caller's input rather than the
    /// environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenantenv::Error;
    ///
    /// let err = Error::InvalidInput {
    ///     field: "env[0].name".to_string(),
    ///     reason: "must not be empty".to_string(),
    /// };
    /// assert!(err.is_invalid_input());
    /// ```
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::Validation { .. } | Self::Configuration(_)
        )
    }

    /// Check if error indicates a file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
