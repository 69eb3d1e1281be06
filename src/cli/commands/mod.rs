//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and applies flag overrides
//! 2. Calls the pipeline to execute the applicable checks
//! 3. Prints the aggregate summary and returns the outcome
//!
//! Handlers do NOT decide the process exit code; `main` does.
//!
//! # Async Commands
//!
//! Manifest validation is async because it involves network I/O. The
//! handlers use a `tokio` runtime to run async pipeline stages within the
//! sync context.

mod all;
mod completion;
mod deps;
mod manifests;
mod scan;
mod test_cmd;

// Re-export command functions for testing and direct invocation
pub use all::all;
pub use completion::completion;
pub use deps::deps;
pub use manifests::manifests;
pub use scan::scan;
pub use test_cmd::test;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{anyhow, Context as _, Result};

use crate::cli::args::Command;
use crate::core::config::Config;
use crate::core::types::{ChangeSet, PipelineOutcome};
use crate::ui::output::Verbosity;

/// Shared context derived from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Monorepo root override; defaults to the current directory.
    pub root: Option<PathBuf>,
    /// Enable debug logging.
    pub debug: bool,
    /// Minimal output.
    pub quiet: bool,
}

impl Context {
    /// Output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Resolve the monorepo root.
    pub fn repo_root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir().context("cannot determine current directory"),
        }
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<PipelineOutcome> {
    match command {
        Command::Deps { files } => deps(ctx, &files),
        Command::Manifests {
            endpoint,
            max_depth,
        } => manifests(ctx, endpoint, max_depth),
        Command::Test { files } => test(ctx, &files),
        Command::Scan { files } => scan(ctx, &files),
        Command::All {
            files,
            endpoint,
            max_depth,
        } => all(ctx, &files, endpoint, max_depth),
        Command::Completion { shell } => {
            completion(shell)?;
            Ok(PipelineOutcome::new())
        }
    }
}

/// Parse a `--files` argument, reading stdin when it is `-`.
pub(crate) fn read_changes(files: &str) -> Result<ChangeSet> {
    if files == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read change list from stdin")?;
        Ok(ChangeSet::parse(&buffer))
    } else {
        Ok(ChangeSet::parse(files))
    }
}

/// Read the validation auth token from the configured environment variable.
pub(crate) fn token_from_env(config: &Config) -> Result<String> {
    std::env::var(&config.token_env).map_err(|_| {
        anyhow!(
            "validation token not available: set the {} environment variable",
            config.token_env
        )
    })
}
