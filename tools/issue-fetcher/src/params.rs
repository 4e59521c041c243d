//! Command-line parameters

use std::fmt;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use gh_common::ToolError;

#[derive(Debug, Parser)]
#[command(name = "issue-fetcher", version)]
#[command(about = "Fetch a GitHub issue via the gh CLI and print a Markdown summary")]
pub struct IssueFetchArgs {
    /// Repository in OWNER/REPO format
    pub repo: RepoSlug,

    /// Issue number
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub number: u64,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// A repository identifier in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoSlug {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ToolError::usage(format!("repository must be OWNER/REPO, got {s:?}"));

        let (owner, name) = s.split_once('/').ok_or_else(invalid)?;
        let is_part = |p: &str| !p.is_empty() && !p.contains('/') && !p.contains(char::is_whitespace);
        if !is_part(owner) || !is_part(name) {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
