//! Markdown rendering of a fetched issue

use std::borrow::Cow;

use crate::types::{Comment, IssueRecord, Label};

/// Shown instead of an empty label list
pub const NO_LABELS: &str = "None";

/// Shown instead of a missing or blank body
pub const NO_DESCRIPTION: &str = "(no description)";

/// Comment bodies longer than this many characters are cut
pub const COMMENT_PREVIEW_CHARS: usize = 200;

/// Appended to a cut comment body
pub const ELLIPSIS: &str = "...";

/// Render an issue as a Markdown summary
pub fn format_issue(issue: &IssueRecord) -> String {
    let body = issue
        .body
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION);

    let mut doc = format!(
        "# Issue Details\n\n\
         **Title**: {title}\n\n\
         **State**: {state}\n\n\
         **Labels**: {labels}\n\n\
         **Author**: @{author}\n\n\
         **Created**: {created}\n\n\
         **Updated**: {updated}\n\n\
         ---\n\n\
         ## Description\n\n\
         {body}\n",
        title = issue.title,
        state = issue.state,
        labels = format_labels(&issue.labels),
        author = issue.author.login,
        created = issue.created_at,
        updated = issue.updated_at,
    );

    if !issue.comments.is_empty() {
        doc.push_str("\n**Comments**:\n");
        doc.push_str(&format_comments(&issue.comments));
    }

    doc.trim().to_string()
}

/// Comma-joined label names, or [`NO_LABELS`]
pub fn format_labels(labels: &[Label]) -> String {
    if labels.is_empty() {
        return NO_LABELS.to_string();
    }
    labels
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One numbered line per comment, in the order given
pub fn format_comments(comments: &[Comment]) -> String {
    comments
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. @{}: {}\n", i + 1, c.author.login, truncate_comment(&c.body)))
        .collect()
}

/// Cut a comment body to [`COMMENT_PREVIEW_CHARS`] characters
///
/// Counts chars, not bytes, so multi-byte text is never split.
pub fn truncate_comment(body: &str) -> Cow<'_, str> {
    match body.char_indices().nth(COMMENT_PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &body[..cut], ELLIPSIS)),
        None => Cow::Borrowed(body),
    }
}
