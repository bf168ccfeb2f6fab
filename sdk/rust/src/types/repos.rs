//! Repository-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner reference embedded in a repository record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryOwner {
    /// Owner's login name
    pub login: String,
    /// Owner's avatar URL
    pub avatar_url: String,
}

/// Repository information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric repository identifier
    pub id: u64,
    /// Repository name
    pub name: String,
    /// "owner/name" form
    pub full_name: String,
    /// Whether the repository is private
    pub private: bool,
    /// Owning account
    pub owner: RepositoryOwner,
    /// Repository description
    pub description: Option<String>,
    /// Whether this repository is a fork
    pub fork: bool,
    /// When the repository was created
    pub created_at: DateTime<Utc>,
    /// When repository metadata last changed
    pub updated_at: DateTime<Utc>,
    /// When commits were last pushed (absent for empty repositories)
    pub pushed_at: Option<DateTime<Utc>>,
    /// Size in kilobytes
    #[serde(default)]
    pub size: u64,
    /// Number of stars
    #[serde(default)]
    pub stargazers_count: u32,
    /// Number of watchers
    #[serde(default)]
    pub watchers_count: u32,
    /// Primary language
    pub language: Option<String>,
    /// Number of forks
    #[serde(default)]
    pub forks_count: u32,
    /// Number of open issues (pull requests included)
    #[serde(default)]
    pub open_issues_count: u32,
    /// Default branch name
    pub default_branch: String,
    /// Web URL of the repository
    pub html_url: String,
}

/// Payload for creating a repository under the authenticated user.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepo {
    /// Repository name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the repository should be private
    pub private: bool,
}
