//! Issue Fetcher Library
//!
//! Fetches a GitHub issue via the `gh` CLI and renders it as Markdown.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use gh_common::GhExecutor;
//! use issue_fetcher::{fetch_issue, format_issue};
//!
//! let issue = fetch_issue(&GhExecutor::default(), &"owner/repo".parse()?, 42).await?;
//! println!("{}", format_issue(&issue.record));
//! ```
//!
//! # Requirements
//! - `gh` CLI installed and authenticated (`gh auth login`)

pub mod command;
pub mod format;
pub mod handlers;
pub mod params;
pub mod types;

pub use command::issue_view_args;
pub use format::format_issue;
pub use handlers::{fetch_issue, issue_file_name, save_issue, FetchedIssue};
pub use params::{IssueFetchArgs, RepoSlug};
pub use types::IssueRecord;
