//! Error types for the gh wrapper tools
//!
//! Every failure a run can hit is one of the variants below. All of them are
//! terminal: the entry point prints the message and exits non-zero.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Exit status used for every failure, usage errors included
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Errors that can occur while running one of the tools
#[derive(Error, Debug)]
pub enum ToolError {
    /// Bad, missing or conflicting arguments (caught before any gh call)
    #[error("{0}")]
    Usage(String),

    /// A local file referenced by the arguments could not be used
    #[error("failed to read {}: {source}", path.display())]
    InputResolution {
        /// Path given on the command line
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external CLI could not be located or executed at all
    #[error("{program} CLI not found or not executable ({source}) - install it first: {install_hint}")]
    ToolNotInstalled {
        /// Program that was spawned
        program: String,
        /// Where to get it
        install_hint: String,
        #[source]
        source: std::io::Error,
    },

    /// The external CLI ran but exited with a non-zero code
    #[error("{program} command failed (exit code {code}): {stderr}")]
    CommandFailed {
        /// Program that was spawned
        program: String,
        /// Exit code, -1 when terminated by a signal
        code: i32,
        /// Standard error output, as emitted
        stderr: String,
    },

    /// The external CLI's stdout violated its output contract
    #[error("malformed response from gh: {0}")]
    MalformedResponse(String),
}

impl ToolError {
    /// Shorthand for a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        ToolError::Usage(message.into())
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Raw stderr of the external command, when the command itself failed
    pub fn command_stderr(&self) -> Option<&str> {
        match self {
            ToolError::CommandFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::MalformedResponse(format!("invalid JSON: {e}"))
    }
}

impl From<FromUtf8Error> for ToolError {
    fn from(e: FromUtf8Error) -> Self {
        ToolError::MalformedResponse(format!("output is not valid UTF-8: {e}"))
    }
}

/// Result type alias for tool operations
pub type ToolResult<T> = Result<T, ToolError>;
