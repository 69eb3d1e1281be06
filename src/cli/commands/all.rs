//! all command - Run every check and aggregate the outcome

use anyhow::Result;

use super::{read_changes, token_from_env, Context};
use crate::core::config::Config;
use crate::core::types::PipelineOutcome;
use crate::pipeline;
use crate::ui::output;
use crate::validate::RemoteValidator;

/// Run dependencies, manifests, tests, and the source scan in order.
pub fn all(
    ctx: &Context,
    files: &str,
    endpoint: Option<String>,
    max_depth: Option<usize>,
) -> Result<PipelineOutcome> {
    let root = ctx.repo_root()?;
    let mut config = Config::load(&root)?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    if let Some(max_depth) = max_depth {
        config.max_depth = max_depth;
    }

    let changes = read_changes(files)?;
    let token = token_from_env(&config)?;
    let validator = RemoteValidator::new(config.endpoint.as_str(), token);

    // Use tokio runtime to run async code
    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(pipeline::run_all(
        &root,
        &config,
        &changes,
        &validator,
        ctx.verbosity(),
    ))?;

    output::summary(&outcome, ctx.verbosity());
    Ok(outcome)
}
