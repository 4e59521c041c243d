//! gh argument vector for `gh pr create`

use crate::params::PullRequestRequest;

/// Build the arguments for creating a pull request
///
/// Title, body and base are always passed. `--head` and `--draft` are only
/// emitted when set, since gh treats an absent flag differently from an
/// empty one.
pub fn pr_create_args(req: &PullRequestRequest) -> Vec<String> {
    let mut args: Vec<String> = [
        "pr",
        "create",
        "--title",
        req.title(),
        "--body",
        req.body(),
        "--base",
        req.base(),
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    if let Some(head) = req.head() {
        args.extend(["--head".to_string(), head.to_string()]);
    }
    if req.is_draft() {
        args.push("--draft".to_string());
    }

    args
}
