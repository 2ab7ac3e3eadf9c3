//! Environment values and their canonical text form.
//!
//! [`EnvVars`] is the structured side, [`EnvCodec`] converts it to and from
//! the `export NAME="VALUE"` text that is persisted and later sourced by
//! the tenant's server process.

mod codec;
mod vars;

#[cfg(test)]
mod proptests;

pub use codec::{EnvCodec, ParsedEnv};
pub use vars::{is_valid_name, EnvVar, EnvVars};
