//! Library exports for tenantenv-cli.
//!
//! This module exports the CLI structure for use by documentation and
//! completion tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for completion and man page tooling
pub use cli::Cli;
