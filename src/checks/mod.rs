//! checks
//!
//! The individual check runners.
//!
//! # Modules
//!
//! - [`deps`] - declared-vs-used dependency analysis (external depcheck)
//! - [`manifest`] - manifest schema validation (remote service)
//! - [`tests`] - package test execution (npm install + jest)
//! - [`scan`] - internal-endpoint and credential scan of changed sources
//!
//! # Two Failure Tiers
//!
//! Every runner returns `Result<CheckResult, CheckError>`:
//!
//! - `Ok(CheckResult::Fail(..))` means the package violated the check.
//!   That is data; the pipeline records it and keeps going.
//! - `Err(CheckError)` means the check itself is broken (tool missing,
//!   unparseable output, unreachable service). That aborts the run, since
//!   silently converting a broken check into a pass or a package failure
//!   would produce misleading signal either way.

pub mod deps;
pub mod manifest;
pub mod scan;

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationError;

/// Infrastructure errors from running a check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The external tool could not be started.
    #[error("failed to invoke {tool}: {source}")]
    ToolInvocation {
        /// Program that failed to start
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but its output cannot be interpreted.
    #[error("unparseable output from {tool}: {message}")]
    ToolOutput {
        /// Program whose output was rejected
        tool: String,
        /// Parse failure detail
        message: String,
    },

    /// A file or directory needed by the check could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The validation service could not be reached or misbehaved.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
