//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DiffCommand, ParseCommand, RenderCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for resolving storage tenant environment configuration.
#[derive(Parser)]
#[command(name = "tenantenv")]
#[command(
    version,
    about = "Resolve and render storage tenant environment configuration",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a tenant's configuration and print it
    Render(RenderCommand),

    /// Read persisted export text and print it in another format
    Parse(ParseCommand),

    /// Show which variables a resolution would change
    Diff(DiffCommand),

    /// Validate a tenant description
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
