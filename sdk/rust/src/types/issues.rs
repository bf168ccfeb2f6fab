//! Issue-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::users::UserSummary;

/// Issue lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// A label attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Label name
    pub name: String,
    /// Hex color without the leading '#'
    pub color: String,
}

/// Issue information.
///
/// The issues listing co-mingles pull requests: an entry carrying the
/// `pull_request` marker is actually a PR. Use [`Issue::is_pull_request`]
/// or [`filter_issues`] when only real issues are wanted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Numeric issue identifier
    pub id: u64,
    /// Issue number within the repository
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Issue author
    pub user: UserSummary,
    /// Lifecycle state
    pub state: IssueState,
    /// Number of comments
    #[serde(default)]
    pub comments: u32,
    /// When the issue was opened
    pub created_at: DateTime<Utc>,
    /// When the issue last changed
    pub updated_at: DateTime<Utc>,
    /// When the issue was closed (if closed)
    pub closed_at: Option<DateTime<Utc>>,
    /// Issue body
    pub body: Option<String>,
    /// Attached labels
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Present when this entry is actually a pull request; kept unparsed
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    /// Whether this listing entry is actually a pull request.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Drop the pull request entries from an issue listing.
///
/// Idempotent: filtering an already-filtered list changes nothing.
#[must_use]
pub fn filter_issues(issues: Vec<Issue>) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| !issue.is_pull_request())
        .collect()
}

/// Payload for opening an issue.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssue {
    /// Issue title
    pub title: String,
    /// Optional issue body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Payload for updating an issue's mutable fields.
///
/// Fields left as `None` are omitted from the request and keep their
/// current value upstream.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateIssue {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// New state (e.g., transition to closed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
}

/// Payload for commenting on an issue.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueComment {
    /// Comment body
    pub body: String,
}

/// A comment on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueComment {
    /// Numeric comment identifier
    pub id: u64,
    /// Comment body
    pub body: String,
    /// Comment author
    pub user: UserSummary,
    /// When the comment was posted
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_json(number: u64, with_pr_marker: bool) -> String {
        let marker = if with_pr_marker {
            r#", "pull_request": {"url": "https://api.github.com/repos/octocat/demo/pulls/1"}"#
        } else {
            ""
        };
        format!(
            r#"{{
                "id": {number},
                "number": {number},
                "title": "Issue {number}",
                "user": {{"login": "octocat", "id": 1, "avatar_url": "https://example.com/a.png"}},
                "state": "open",
                "comments": 0,
                "created_at": "2024-01-15T10:30:00Z",
                "updated_at": "2024-01-15T10:30:00Z",
                "closed_at": null,
                "body": null,
                "labels": []{marker}
            }}"#
        )
    }

    fn parse_issue(json: &str) -> Issue {
        serde_json::from_str(json).expect("Should deserialize")
    }

    #[test]
    fn test_pull_request_marker_detected() {
        let issue = parse_issue(&issue_json(1, false));
        assert!(!issue.is_pull_request());

        let pr_entry = parse_issue(&issue_json(2, true));
        assert!(pr_entry.is_pull_request());
    }

    #[test]
    fn test_filter_issues_drops_pull_requests_and_is_idempotent() {
        let issues: Vec<Issue> = (1..=10)
            .map(|n| parse_issue(&issue_json(n, n <= 3)))
            .collect();

        let filtered = filter_issues(issues);
        assert_eq!(filtered.len(), 7);
        assert!(filtered.iter().all(|issue| !issue.is_pull_request()));

        let refiltered = filter_issues(filtered);
        assert_eq!(refiltered.len(), 7);
    }

    #[test]
    fn test_update_issue_serializes_only_set_fields() {
        let update = UpdateIssue {
            state: Some(IssueState::Closed),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).expect("Should serialize");
        assert_eq!(json["state"], "closed");
        assert!(json.get("title").is_none());
        assert!(json.get("body").is_none());
    }
}
