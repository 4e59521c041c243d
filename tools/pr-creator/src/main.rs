//! PR Creator
//!
//! Creates a GitHub pull request through the GitHub CLI (`gh`) and relays
//! gh's own output.
//!
//! # Usage
//!
//! ```bash
//! pr-creator --title "Fix login" --body-file pr.md --base main --head fix/issue-123
//! ```
//!
//! # Requirements
//!
//! - GitHub CLI (`gh`) must be installed and in PATH
//! - `gh` must be authenticated (`gh auth login`)

use std::process::ExitCode;

use gh_common::{init_tracing, parse_args, GhExecutor, ToolError, ToolResult, ToolsConfig};
use pr_creator::{create_pull_request, PrCreateArgs, PullRequestRequest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: PrCreateArgs = parse_args();

    if let Err(e) = init_tracing("pr_creator", args.verbose) {
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

async fn run(args: &PrCreateArgs) -> ToolResult<()> {
    let req = PullRequestRequest::from_args(args)?;

    let config = ToolsConfig::load();
    let gh = GhExecutor::from_config(&config.gh);

    println!("Creating PR: {}", req.title());
    println!("  Base branch: {}", req.base());
    if let Some(head) = req.head() {
        println!("  Head branch: {}", head);
    }
    if req.is_draft() {
        println!("  Type: draft");
    }

    let output = create_pull_request(&gh, &req).await?;

    println!("PR created successfully!");
    print!("{}", output);

    Ok(())
}

fn report(err: &ToolError) {
    match err {
        ToolError::CommandFailed { stderr, .. } => eprintln!("PR creation failed: {}", stderr),
        other => eprintln!("Error: {}", other),
    }
}
