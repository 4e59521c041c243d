//! Pull Request handler implementations

use gh_common::{GhExecutor, ToolResult};
use tracing::{info, instrument};

use crate::command::pr_create_args;
use crate::params::PullRequestRequest;

/// Create a new pull request
///
/// Returns gh's stdout untouched (normally the new PR URL).
#[instrument(skip_all, fields(base = %req.base(), head = ?req.head(), draft = req.is_draft()))]
pub async fn create_pull_request(gh: &GhExecutor, req: &PullRequestRequest) -> ToolResult<String> {
    let args = pr_create_args(req);
    let output = gh.execute(&args).await?;
    info!("pull request created");
    Ok(output)
}
