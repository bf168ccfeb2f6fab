//! User-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::repos::Repository;

/// A full user profile, as returned by `/user` and `/users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Account login name
    pub login: String,
    /// Numeric account identifier
    pub id: u64,
    /// Avatar image URL
    pub avatar_url: String,
    /// Display name
    pub name: Option<String>,
    /// Profile biography
    pub bio: Option<String>,
    /// Company affiliation
    pub company: Option<String>,
    /// Blog or website URL
    pub blog: Option<String>,
    /// Location
    pub location: Option<String>,
    /// Public email address
    pub email: Option<String>,
    /// Whether the user is open to hiring
    pub hireable: Option<bool>,
    /// Number of public repositories
    #[serde(default)]
    pub public_repos: u32,
    /// Number of public gists
    #[serde(default)]
    pub public_gists: u32,
    /// Follower count
    #[serde(default)]
    pub followers: u32,
    /// Following count
    #[serde(default)]
    pub following: u32,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated
    pub updated_at: DateTime<Utc>,
}

/// An abbreviated user record, as embedded in listings (followers,
/// following, search results, issue and pull request authors).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// Account login name
    pub login: String,
    /// Numeric account identifier
    pub id: u64,
    /// Avatar image URL
    pub avatar_url: String,
}

/// A linked social account on a user profile.
///
/// The endpoint backing this type is unavailable for some accounts and
/// plans; see `UsersClient::social_accounts_or_empty`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialAccount {
    /// Provider name (e.g., "twitter", "mastodon")
    pub provider: String,
    /// Profile URL on the provider
    pub url: String,
}

/// One public event from a user's activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier
    pub id: String,
    /// Event kind (e.g., "PushEvent", "WatchEvent")
    #[serde(rename = "type")]
    pub event_type: String,
    /// Acting user
    pub actor: EventActor,
    /// Repository the event happened in
    pub repo: EventRepo,
    /// Kind-specific payload, kept unparsed
    pub payload: serde_json::Value,
    /// When the event occurred
    pub created_at: DateTime<Utc>,
}

/// The user who triggered an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventActor {
    pub login: String,
    pub avatar_url: String,
}

/// The repository an event refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
    pub url: String,
}

/// Response of the user search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSearchResults {
    /// Total number of matches upstream (beyond the returned page)
    pub total_count: u64,
    /// Whether the search timed out before scanning everything
    pub incomplete_results: bool,
    /// Matching users, one page only
    pub items: Vec<UserSummary>,
}

/// Aggregate profile view assembled from several user endpoints.
///
/// `social_accounts` is empty rather than an error when that endpoint is
/// unavailable for the account.
#[derive(Debug, Clone, Serialize)]
pub struct UserOverview {
    pub user: User,
    pub repos: Vec<Repository>,
    pub starred: Vec<Repository>,
    pub events: Vec<Event>,
    pub followers: Vec<UserSummary>,
    pub following: Vec<UserSummary>,
    pub social_accounts: Vec<SocialAccount>,
}
