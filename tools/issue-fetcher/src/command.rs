//! gh argument vector for `gh issue view`

use crate::params::RepoSlug;
use crate::types::IssueRecord;

/// Build the arguments for viewing one issue as JSON
///
/// Produces `issue view <N> --repo <owner/name> --json <fields>` with the
/// fixed field list from [`IssueRecord::view_fields`].
pub fn issue_view_args(repo: &RepoSlug, number: u64) -> Vec<String> {
    vec![
        "issue".to_string(),
        "view".to_string(),
        number.to_string(),
        "--repo".to_string(),
        repo.to_string(),
        "--json".to_string(),
        IssueRecord::view_fields().join(","),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_view_args_shape() {
        let repo: RepoSlug = "owner/repo".parse().unwrap();
        assert_eq!(
            issue_view_args(&repo, 123),
            vec![
                "issue",
                "view",
                "123",
                "--repo",
                "owner/repo",
                "--json",
                "title,body,labels,state,comments,author,createdAt,updatedAt",
            ]
        );
    }

    #[test]
    fn test_issue_view_args_requests_exact_field_list() {
        for (slug, number) in [("a/b", 1u64), ("octo-org/hello.world", 98765)] {
            let repo: RepoSlug = slug.parse().unwrap();
            let args = issue_view_args(&repo, number);

            let json_at = args.iter().position(|a| a == "--json").unwrap();
            let fields: Vec<&str> = args[json_at + 1].split(',').collect();
            assert_eq!(fields, IssueRecord::view_fields());
            assert_eq!(args.iter().filter(|a| *a == "--json").count(), 1);

            assert!(args.contains(&number.to_string()));
            assert!(args.contains(&slug.to_string()));
            assert_eq!(args.len(), 7);
        }
    }
}
