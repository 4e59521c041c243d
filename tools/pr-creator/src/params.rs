//! Pull request parameter types

use std::path::{Path, PathBuf};

use clap::{ArgAction, ArgGroup, Parser};
use gh_common::{ToolError, ToolResult};

/// Base branch used when `--base` is not given
pub const DEFAULT_BASE: &str = "main";

#[derive(Debug, Parser)]
#[command(name = "pr-creator", version)]
#[command(about = "Create a GitHub pull request via the gh CLI")]
#[command(group(ArgGroup::new("body_source").args(["body", "body_file"]).required(true)))]
pub struct PrCreateArgs {
    /// Pull request title
    #[arg(long)]
    pub title: String,

    /// Pull request body in markdown
    #[arg(long)]
    pub body: Option<String>,

    /// Read the pull request body from a file
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// Base branch to merge into
    #[arg(long, default_value = DEFAULT_BASE)]
    pub base: String,

    /// Head branch with changes (defaults to the current branch)
    #[arg(long)]
    pub head: Option<String>,

    /// Create as draft PR
    #[arg(long)]
    pub draft: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl PrCreateArgs {
    /// Where the body comes from, enforcing exactly one source
    pub fn body_source(&self) -> ToolResult<BodySource> {
        BodySource::from_options(self.body.clone(), self.body_file.clone())
    }
}

/// The single source of a pull request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    Text(String),
    File(PathBuf),
}

impl BodySource {
    /// Pick the body source from the two mutually exclusive options
    pub fn from_options(body: Option<String>, body_file: Option<PathBuf>) -> ToolResult<Self> {
        match (body, body_file) {
            (Some(text), None) => Ok(BodySource::Text(text)),
            (None, Some(path)) => Ok(BodySource::File(path)),
            (Some(_), Some(_)) => Err(ToolError::usage(
                "--body and --body-file are mutually exclusive, provide only one",
            )),
            (None, None) => Err(ToolError::usage(
                "a pull request body is required, provide --body or --body-file",
            )),
        }
    }

    /// Produce the body text, reading the file if needed
    ///
    /// An empty or whitespace-only file is rejected like an unreadable one.
    pub fn resolve(self) -> ToolResult<String> {
        match self {
            BodySource::Text(text) => Ok(text),
            BodySource::File(path) => read_body_file(&path),
        }
    }
}

fn read_body_file(path: &Path) -> ToolResult<String> {
    let resolution = |source: std::io::Error| ToolError::InputResolution {
        path: path.to_path_buf(),
        source,
    };

    let body = std::fs::read_to_string(path).map_err(resolution)?;
    if body.trim().is_empty() {
        return Err(resolution(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "file is empty or whitespace-only",
        )));
    }
    Ok(body)
}

/// A validated request to open a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRequest {
    title: String,
    body: String,
    base: String,
    head: Option<String>,
    draft: bool,
}

impl PullRequestRequest {
    /// Validate the parts of a request
    ///
    /// Title, body and base must be non-blank. An empty head is treated as
    /// no head at all.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        base: impl Into<String>,
        head: Option<String>,
        draft: bool,
    ) -> ToolResult<Self> {
        let title = title.into();
        let body = body.into();
        let base = base.into();

        if title.trim().is_empty() {
            return Err(ToolError::usage("--title must not be empty"));
        }
        if body.trim().is_empty() {
            return Err(ToolError::usage("pull request body must not be empty"));
        }
        if base.trim().is_empty() {
            return Err(ToolError::usage("--base must not be empty"));
        }

        Ok(Self {
            title,
            body,
            base,
            head: head.filter(|h| !h.trim().is_empty()),
            draft,
        })
    }

    /// Validate command-line arguments and resolve the body
    ///
    /// Argument problems are reported before the body file is touched.
    pub fn from_args(args: &PrCreateArgs) -> ToolResult<Self> {
        let source = args.body_source()?;
        if args.title.trim().is_empty() {
            return Err(ToolError::usage("--title must not be empty"));
        }
        let body = source.resolve()?;
        Self::new(
            args.title.clone(),
            body,
            args.base.clone(),
            args.head.clone(),
            args.draft,
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn head(&self) -> Option<&str> {
        self.head.as_deref()
    }

    pub fn is_draft(&self) -> bool {
        self.draft
    }
}
