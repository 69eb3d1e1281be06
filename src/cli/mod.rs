//! cli
//!
//! Command-line interface layer for snapci.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT run checks directly; handlers call into [`crate::pipeline`]
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! the pipeline for execution. Handlers return the aggregate
//! [`PipelineOutcome`]; the binary entry point maps it to the process exit
//! code, keeping check failures (exit 1) distinct from infrastructure
//! errors (exit 2).

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;

use crate::core::types::PipelineOutcome;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<PipelineOutcome> {
    let cli = Cli::parse_args();

    let ctx = commands::Context {
        root: cli.root.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
