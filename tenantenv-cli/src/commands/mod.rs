//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `render`: Resolve a tenant's configuration and print or write it
//! - `parse`: Read persisted export text and re-render it
//! - `diff`: Report which variables a resolution would change
//! - `validate`: Validate a tenant description
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod diff;
pub mod parse;
pub mod render;
pub mod validate;

pub use completions::CompletionsCommand;
pub use diff::DiffCommand;
pub use parse::ParseCommand;
pub use render::RenderCommand;
pub use validate::ValidateCommand;
