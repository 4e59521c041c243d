//! Issue fetch and persistence

use std::path::{Path, PathBuf};

use gh_common::{GhExecutor, ToolResult};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::command::issue_view_args;
use crate::params::RepoSlug;
use crate::types::IssueRecord;

/// An issue as fetched: the raw payload plus its typed view
#[derive(Debug, Clone)]
pub struct FetchedIssue {
    /// Decoded JSON exactly as gh emitted it
    pub payload: Value,
    pub record: IssueRecord,
}

/// Fetch one issue through gh and validate the response
#[instrument(skip(gh, repo), fields(repo = %repo))]
pub async fn fetch_issue(gh: &GhExecutor, repo: &RepoSlug, number: u64) -> ToolResult<FetchedIssue> {
    let args = issue_view_args(repo, number);
    let stdout = gh.execute(&args).await?;

    let payload: Value = serde_json::from_str(&stdout)?;
    let record = IssueRecord::from_payload(&payload)?;
    debug!(comments = record.comments.len(), "issue decoded");

    Ok(FetchedIssue { payload, record })
}

/// File name the payload of issue `number` is saved under
pub fn issue_file_name(number: u64) -> String {
    format!("issue-{number}.json")
}

/// Write the raw payload to `<output_dir>/issue-<N>.json`
///
/// Pretty-printed with two-space indentation; non-ASCII text is kept as is.
pub fn save_issue(payload: &Value, number: u64, output_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(issue_file_name(number));
    let json = serde_json::to_string_pretty(payload)?;
    std::fs::write(&path, json)?;
    debug!(path = %path.display(), "issue saved");
    Ok(path)
}
