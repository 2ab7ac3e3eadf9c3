//! Main entry point for the tenantenv CLI.
//!
//! This is the command-line interface for resolving storage tenant
//! environment configuration. It provides commands for:
//! - `render`: Resolve and print a tenant's configuration
//! - `parse`: Re-render persisted export text
//! - `diff`: Show which variables would change
//! - `validate`: Validate a tenant description
//! - `completions`: Generate shell completions

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity; library records go to stderr
    let logger = tenantenv::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        quiet: cli.quiet,
        log_level: logger.level(),
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Render(cmd) => cmd.execute(&global),
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Diff(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
