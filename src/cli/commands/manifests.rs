//! manifests command - Remote validation of manifest descriptors

use anyhow::Result;

use super::{token_from_env, Context};
use crate::core::config::Config;
use crate::core::types::PipelineOutcome;
use crate::pipeline;
use crate::ui::output;
use crate::validate::RemoteValidator;

/// Validate every manifest descriptor under the root.
pub fn manifests(
    ctx: &Context,
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

    let token = token_from_env(&config)?;
    let validator = RemoteValidator::new(config.endpoint.as_str(), token);

    // Use tokio runtime to run async code
    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(pipeline::run_manifest_checks(
        &root,
        &config,
        &validator,
        ctx.verbosity(),
    ))?;

    output::summary(&outcome, ctx.verbosity());
    Ok(outcome)
}
