//! gh Common - Shared plumbing for the gh wrapper tools
//!
//! This crate provides the functionality both tools need:
//!
//! - **Executor**: [`GhExecutor`] runs the external CLI and normalizes its result
//! - **Errors**: [`ToolError`], the one error type every step reports with
//! - **Config**: [`ToolsConfig`] loaded from `gh-tools.toml`
//! - **Initialization**: tracing setup and argument parsing for `main`
//!
//! # Example
//!
//! ```rust,ignore
//! use gh_common::{init_tracing, GhExecutor, ToolsConfig};
//!
//! init_tracing("my_tool", 0)?;
//! let config = ToolsConfig::load();
//! let gh = GhExecutor::from_config(&config.gh);
//! let out = gh.execute(&args).await?;
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod init;
#[cfg(all(unix, any(test, feature = "testing")))]
pub mod testing;

pub use config::{GhConfig, IssueConfig, ToolsConfig};
pub use error::{ToolError, ToolResult, FAILURE_EXIT_CODE};
pub use executor::GhExecutor;
pub use init::{init_tracing, parse_args};
