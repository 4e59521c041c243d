//! Issue Fetcher
//!
//! Fetches a GitHub issue through the GitHub CLI (`gh`), prints a Markdown
//! summary and saves the raw JSON payload to `issue-<N>.json`.
//!
//! # Usage
//!
//! ```bash
//! issue-fetcher owner/repo 123
//! ```
//!
//! # Requirements
//!
//! - GitHub CLI (`gh`) must be installed and in PATH
//! - `gh` must be authenticated (`gh auth login`)

use std::process::ExitCode;

use gh_common::{init_tracing, parse_args, GhExecutor, ToolError, ToolResult, ToolsConfig};
use issue_fetcher::{fetch_issue, format_issue, save_issue, IssueFetchArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: IssueFetchArgs = parse_args();

    if let Err(e) = init_tracing("issue_fetcher", args.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: &IssueFetchArgs) -> ToolResult<()> {
    let config = ToolsConfig::load();
    let gh = GhExecutor::from_config(&config.gh);

    println!("Fetching issue #{} from {}...", args.number, args.repo);

    let issue = fetch_issue(&gh, &args.repo, args.number).await?;

    println!("\nIssue details:\n");
    println!("{}", format_issue(&issue.record));

    // Saving is best effort; the fetch already succeeded
    match save_issue(&issue.payload, args.number, &config.issue.output_dir) {
        Ok(path) => println!("\nIssue data saved to: {}", path.display()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to save issue data");
            eprintln!("Warning: failed to save issue data: {}", e);
        }
    }

    Ok(())
}

fn report(err: &ToolError) {
    match err {
        ToolError::CommandFailed { stderr, .. } => {
            eprintln!("Failed to fetch issue: {}", stderr.trim_end())
        }
        ToolError::MalformedResponse(reason) => eprintln!("Failed to parse issue JSON: {}", reason),
        other => eprintln!("Error: {}", other),
    }
}
