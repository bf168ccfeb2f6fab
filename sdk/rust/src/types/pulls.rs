//! Pull request-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::users::UserSummary;

/// Pull request lifecycle state as reported on the wire.
///
/// `Closed` alone says nothing about merging; see [`PullRequest::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Closed,
}

/// Head or base reference of a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Branch name
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// Commit sha the ref points at
    pub sha: String,
}

/// Pull request information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// Numeric pull request identifier
    pub id: u64,
    /// Pull request number within the repository
    pub number: u64,
    /// Pull request title
    pub title: String,
    /// Pull request author
    pub user: UserSummary,
    /// Wire state: open or closed
    pub state: PullRequestState,
    /// When the pull request was opened
    pub created_at: DateTime<Utc>,
    /// When the pull request last changed
    pub updated_at: DateTime<Utc>,
    /// When the pull request was closed (if closed)
    pub closed_at: Option<DateTime<Utc>>,
    /// When the pull request was merged; null until merged
    pub merged_at: Option<DateTime<Utc>>,
    /// Pull request body
    pub body: Option<String>,
    /// Source branch
    pub head: PullRequestRef,
    /// Target branch
    pub base: PullRequestRef,
    /// Web URL of the pull request
    pub html_url: String,
}

/// Effective status of a pull request.
///
/// The wire `state` field cannot distinguish merged from closed-unmerged;
/// only a non-null `merged_at` marks a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestStatus {
    Open,
    Merged,
    Closed,
}

impl PullRequest {
    /// Classify this pull request as open, merged, or closed-unmerged.
    #[must_use]
    pub fn status(&self) -> PullRequestStatus {
        match (self.state, self.merged_at) {
            (PullRequestState::Open, _) => PullRequestStatus::Open,
            (PullRequestState::Closed, Some(_)) => PullRequestStatus::Merged,
            (PullRequestState::Closed, None) => PullRequestStatus::Closed,
        }
    }
}

/// Payload for opening a pull request.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePullRequest {
    /// Pull request title
    pub title: String,
    /// Source branch name
    pub head: String,
    /// Target branch name
    pub base: String,
    /// Optional pull request body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Result of merging a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeResult {
    /// Sha of the merge commit
    pub sha: String,
    /// Whether the merge happened
    pub merged: bool,
    /// Upstream status message
    pub message: String,
}
