//! Issue type definitions
//!
//! Structs representing GitHub issue data as returned by gh CLI.
//! These types mirror the JSON structure from `gh issue view --json`.

use std::fmt;

use gh_common::{ToolError, ToolResult};
use serde::{Deserialize, Serialize};

/// Represents a GitHub issue
///
/// Holds exactly the fields requested by [`IssueRecord::view_fields`].
/// Timestamps stay as the ISO 8601 text gh reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    /// Issue title
    pub title: String,

    /// Issue body/description (markdown)
    #[serde(default)]
    pub body: Option<String>,

    /// Issue state
    pub state: IssueState,

    /// Applied labels, in the order gh returned them
    #[serde(default)]
    pub labels: Vec<Label>,

    /// Issue author
    pub author: User,

    /// Creation timestamp (ISO 8601)
    pub created_at: String,

    /// Last update timestamp (ISO 8601)
    pub updated_at: String,

    /// Comments, oldest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl IssueRecord {
    /// Returns the JSON fields to request from gh CLI for the view operation
    pub fn view_fields() -> &'static [&'static str] {
        &[
            "title",
            "body",
            "labels",
            "state",
            "comments",
            "author",
            "createdAt",
            "updatedAt",
        ]
    }

    /// Validate a decoded gh payload against the issue schema
    pub fn from_payload(payload: &serde_json::Value) -> ToolResult<Self> {
        Self::deserialize(payload)
            .map_err(|e| ToolError::MalformedResponse(format!("unexpected issue payload: {e}")))
    }

    /// Label names, in order
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.name.as_str())
    }
}

/// Issue state as reported by gh
///
/// Only gh's exact spellings are accepted, so the rendered state always
/// matches the payload text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueState {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "CLOSED")]
    Closed,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "OPEN",
            IssueState::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a GitHub user (issue or comment author)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// GitHub login/username
    pub login: String,
}

/// Represents a GitHub label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// A comment on an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: User,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_payload_minimal_issue() {
        let payload = json!({
            "title": "Bug",
            "body": "",
            "state": "OPEN",
            "labels": [],
            "author": {"login": "alice"},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "comments": []
        });

        let issue = IssueRecord::from_payload(&payload).unwrap();
        assert_eq!(issue.title, "Bug");
        assert_eq!(issue.body.as_deref(), Some(""));
        assert_eq!(issue.state, IssueState::Open);
        assert_eq!(issue.author.login, "alice");
        assert_eq!(issue.created_at, "2024-01-01T00:00:00Z");
        assert!(issue.labels.is_empty());
        assert!(issue.comments.is_empty());
    }

    #[test]
    fn test_from_payload_ignores_extra_fields() {
        let payload = json!({
            "title": "Crash on start",
            "body": null,
            "state": "CLOSED",
            "labels": [
                {"id": "LA_1", "name": "bug", "color": "d73a4a", "description": ""},
                {"id": "LA_2", "name": "p1", "color": "000000", "description": ""}
            ],
            "author": {"id": "U_1", "login": "bob", "name": "Bob", "is_bot": false},
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-02T10:00:00Z",
            "comments": [{
                "id": "IC_1",
                "author": {"login": "carol"},
                "authorAssociation": "MEMBER",
                "body": "Repro attached",
                "createdAt": "2024-03-01T11:00:00Z",
                "reactionGroups": []
            }]
        });

        let issue = IssueRecord::from_payload(&payload).unwrap();
        assert_eq!(issue.state, IssueState::Closed);
        assert_eq!(issue.body, None);
        assert_eq!(issue.label_names().collect::<Vec<_>>(), vec!["bug", "p1"]);
        assert_eq!(issue.comments[0].author.login, "carol");
        assert_eq!(issue.comments[0].body, "Repro attached");
    }

    #[test]
    fn test_from_payload_missing_field_is_malformed() {
        let payload = json!({"title": "No state", "author": {"login": "a"}});
        let err = IssueRecord::from_payload(&payload).unwrap_err();
        assert!(matches!(err, ToolError::MalformedResponse(ref m) if m.contains("state")));
    }

    #[test]
    fn test_from_payload_unknown_state_is_malformed() {
        let payload = json!({
            "title": "x",
            "state": "MERGED",
            "author": {"login": "a"},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        });
        assert!(IssueRecord::from_payload(&payload).is_err());
    }

    #[test]
    fn test_from_payload_rejects_lowercase_state() {
        for state in ["open", "closed", "Open"] {
            let payload = json!({
                "title": "x",
                "state": state,
                "author": {"login": "a"},
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            });
            let err = IssueRecord::from_payload(&payload).unwrap_err();
            assert!(matches!(err, ToolError::MalformedResponse(_)), "state {state}");
        }
    }

    #[test]
    fn test_state_display_matches_gh() {
        assert_eq!(IssueState::Open.to_string(), "OPEN");
        assert_eq!(IssueState::Closed.to_string(), "CLOSED");
    }

    #[test]
    fn test_view_fields() {
        assert_eq!(
            IssueRecord::view_fields().join(","),
            "title,body,labels,state,comments,author,createdAt,updatedAt"
        );
    }
}
