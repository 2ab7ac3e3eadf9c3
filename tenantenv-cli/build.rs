//! Build script for tenantenv-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("tenantenv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and render storage tenant environment configuration")
        .long_about(
            "Command-line tool that merges defaults, topology-derived values, persisted \
             configuration and user overrides into a tenant's environment file",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("render")
                .about("Resolve a tenant's configuration and print it")
                .long_about(
                    "Merge defaults, derived values, persisted text and user overrides \
                     and print the canonical export text",
                ),
            Command::new("parse")
                .about("Read persisted export text and print it in another format")
                .long_about("Leniently parse export text and re-render it as export, dotenv or JSON"),
            Command::new("diff")
                .about("Show which variables a resolution would change")
                .long_about("Compare a fresh resolution with the persisted text and list changes"),
            Command::new("validate")
                .about("Validate a tenant description")
                .long_about("Check a tenant description file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main tenantenv.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("tenantenv.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
