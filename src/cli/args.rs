//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--root <path>`: Run against that monorepo root
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//!
//! # Change Lists
//!
//! Commands that select packages take `--files`, the newline-separated
//! list of changed paths produced by the CI diff step. Pass `-` to read
//! the list from stdin instead.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// snapci - CI checks for snap-in monorepos
#[derive(Parser, Debug)]
#[command(name = "snapci")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run against this monorepo root instead of the current directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output (failures are still shown)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check declared vs used dependencies for affected packages
    #[command(
        name = "deps",
        long_about = "Check declared vs used dependencies for affected packages.\n\n\
            Maps the change list to package roots, then runs the dependency \
            analyzer against each package's code directory. Unused \
            dependencies fail the check; so do undeclared ones, reported \
            with the files referencing them."
    )]
    Deps {
        /// Newline-separated changed file paths, or - for stdin
        #[arg(long, value_name = "LIST")]
        files: String,
    },

    /// Validate manifest descriptors against the validation service
    #[command(
        name = "manifests",
        long_about = "Validate manifest descriptors against the validation service.\n\n\
            Finds every manifest under the root (depth-bounded) and submits \
            each to the remote validator. The auth token is read from the \
            configured environment variable (ACTOR_JWT by default)."
    )]
    Manifests {
        /// Override the validation endpoint URL
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Override the manifest discovery depth bound
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Install dependencies and run tests for affected packages
    #[command(
        name = "test",
        long_about = "Install dependencies and run tests for affected packages.\n\n\
            Derives package roots from the modified-file list, resolves each \
            package's code directory, installs its dependencies, and runs \
            its suite with a force-exit flag so lingering handles cannot \
            hang CI. Test output streams through."
    )]
    Test {
        /// Newline-separated changed file paths, or - for stdin
        #[arg(long, value_name = "LIST")]
        files: String,
    },

    /// Scan changed sources for internal endpoints and credentials
    #[command(
        name = "scan",
        long_about = "Scan changed sources for internal endpoints and credentials.\n\n\
            Changed .ts/.js files are searched for internal API references; \
            all changed files are searched for JWT-shaped secrets. Generated \
            SDK files are exempt."
    )]
    Scan {
        /// Newline-separated changed file paths, or - for stdin
        #[arg(long, value_name = "LIST")]
        files: String,
    },

    /// Run every check and aggregate the outcome
    #[command(
        name = "all",
        long_about = "Run every check and aggregate the outcome.\n\n\
            Dependencies, manifests, tests, then the source scan, in that \
            order. No check short-circuits the run: one invocation reports \
            every problem. Exits 0 only when everything passes.",
        after_help = "\
WORKFLOW EXAMPLE:
    # In CI, against the files changed by a pull request
    CHANGED=$(git diff --name-only origin/main...HEAD)
    snapci all --files \"$CHANGED\""
    )]
    All {
        /// Newline-separated changed file paths, or - for stdin
        #[arg(long, value_name = "LIST")]
        files: String,

        /// Override the validation endpoint URL
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Override the manifest discovery depth bound
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
