//! test command - Package test execution for affected packages

use anyhow::Result;

use super::{read_changes, Context};
use crate::core::config::Config;
use crate::core::types::PipelineOutcome;
use crate::pipeline;
use crate::ui::output;

/// Install dependencies and run the suite for every eligible package.
pub fn test(ctx: &Context, files: &str) -> Result<PipelineOutcome> {
    let root = ctx.repo_root()?;
    let config = Config::load(&root)?;
    let changes = read_changes(files)?;

    let outcome = pipeline::run_test_checks(&root, &config, &changes, ctx.verbosity())?;
    output::summary(&outcome, ctx.verbosity());
    Ok(outcome)
}
