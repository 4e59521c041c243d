//! Async executor for gh CLI commands
//!
//! Runs the external CLI as a single child process, captures both output
//! streams in full and maps the exit status onto [`ToolError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use gh_common::GhExecutor;
//!
//! let gh = GhExecutor::default();
//! let stdout = gh
//!     .execute(&["issue".into(), "view".into(), "42".into()])
//!     .await?;
//! ```

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::config::GhConfig;
use crate::error::{ToolError, ToolResult};

/// Runs commands against one external CLI binary
#[derive(Debug, Clone)]
pub struct GhExecutor {
    program: String,
    install_hint: String,
}

impl Default for GhExecutor {
    fn default() -> Self {
        Self::from_config(&GhConfig::default())
    }
}

impl GhExecutor {
    /// Create an executor for an explicit program
    pub fn new(program: impl Into<String>, install_hint: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            install_hint: install_hint.into(),
        }
    }

    /// Create an executor from the `[gh]` config section
    pub fn from_config(config: &GhConfig) -> Self {
        Self::new(config.program.clone(), config.install_hint.clone())
    }

    /// The program this executor spawns
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Execute a command and return its stdout
    ///
    /// Waits for the child without a timeout. Stdout is decoded strictly as
    /// UTF-8 and returned untouched, trailing newline included.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The program cannot be spawned ([`ToolError::ToolNotInstalled`])
    /// - The command exits with non-zero status ([`ToolError::CommandFailed`])
    /// - Stdout is not valid UTF-8 ([`ToolError::MalformedResponse`])
    #[instrument(skip_all, fields(program = %self.program, cmd = %args.join(" ")))]
    pub async fn execute(&self, args: &[String]) -> ToolResult<String> {
        debug!("executing: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.not_installed(e))?
            .wait_with_output()
            .await
            .map_err(|e| ToolError::CommandFailed {
                program: self.program.clone(),
                code: -1,
                stderr: format!("failed to collect output: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            let code = output.status.code().unwrap_or(-1);

            debug!(code, stderr = %stderr, "command failed");
            return Err(ToolError::CommandFailed {
                program: self.program.clone(),
                code,
                stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        debug!(bytes = stdout.len(), "command succeeded");
        Ok(stdout)
    }

    fn not_installed(&self, source: std::io::Error) -> ToolError {
        debug!(error = %source, "failed to run {}", self.program);
        ToolError::ToolNotInstalled {
            program: self.program.clone(),
            install_hint: self.install_hint.clone(),
            source,
        }
    }
}
