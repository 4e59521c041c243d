//! PR Creator Library
//!
//! Creates GitHub pull requests via the `gh` CLI.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use gh_common::GhExecutor;
//! use pr_creator::{create_pull_request, PullRequestRequest};
//!
//! let req = PullRequestRequest::new("Fix login", "Fixes #123", "main", None, false)?;
//! let url = create_pull_request(&GhExecutor::default(), &req).await?;
//! ```
//!
//! # Requirements
//! - `gh` CLI installed and authenticated (`gh auth login`)

pub mod command;
pub mod handlers;
pub mod params;

pub use command::pr_create_args;
pub use handlers::create_pull_request;
pub use params::{BodySource, PrCreateArgs, PullRequestRequest, DEFAULT_BASE};
