//! scan command - Endpoint and credential scan of changed sources

use anyhow::Result;

use super::{read_changes, Context};
use crate::core::types::PipelineOutcome;
use crate::pipeline;
use crate::ui::output;

/// Scan the changed files for internal endpoints and hardcoded credentials.
pub fn scan(ctx: &Context, files: &str) -> Result<PipelineOutcome> {
    let root = ctx.repo_root()?;
    let changes = read_changes(files)?;

    let outcome = pipeline::run_scan(&root, &changes, ctx.verbosity());
    output::summary(&outcome, ctx.verbosity());
    Ok(outcome)
}
