//! CLI argument parsing for revpath.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// revpath: inspect code-review configuration documents.
///
/// Loads a review configuration (`.coderabbit.yaml`) and reports which
/// paths are excluded from review and which instructions apply to the rest.
#[derive(Parser, Debug)]
#[command(name = "revpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the review config. Defaults to the nearest `.coderabbit.yaml`
    /// (or `.coderabbit.yml`) at or above the current directory.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for revpath.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the review config.
    ///
    /// Loads the document, failing on the first invalid field, and prints
    /// a short summary of what it declares.
    Check,

    /// Show how paths are reviewed.
    ///
    /// For each path, prints whether it is excluded and, if not, every
    /// instruction block that applies, in declaration order.
    Resolve(ResolveArgs),

    /// Lint the review config for likely mistakes.
    ///
    /// Fails when any error-level finding is reported.
    Lint,

    /// Print the normalized review config.
    Show(ShowArgs),
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Repo-relative paths to resolve (e.g. App/Views/HomeView.swift).
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Output formats for `show`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
