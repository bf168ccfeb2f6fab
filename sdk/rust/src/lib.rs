//! HubDeck SDK for Rust
//!
//! Typed client for the GitHub REST API backing the HubDeck dashboard:
//! users, repositories, branches, contents, issues, pull requests and the
//! rate limit snapshot, behind one authenticated request pipeline.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hubdeck::{AccessToken, GitHubClient};
//!
//! let token = AccessToken::new(std::env::var("GITHUB_TOKEN")?)?;
//! let client = GitHubClient::new(token, None)?;
//!
//! let me = client.users().authenticated().await?;
//! println!("Signed in as {}", me.login);
//!
//! let repos = client.repos().list_own().await?;
//! for repo in repos {
//!     println!("{} ({} stars)", repo.full_name, repo.stargazers_count);
//! }
//! ```
//!
//! Every call is a single upstream request: no caching, no retry, no
//! pagination beyond one page. Failures carry the upstream status and raw
//! body; see [`Error`].

pub mod client;
pub mod clients;
pub mod error;
pub mod transport;
pub mod types;

// Re-exports
pub use client::GitHubClient;
pub use clients::contents::encode_content;
pub use clients::{
    BranchesClient, ContentsClient, IssuesClient, MetaClient, PullsClient, ReposClient,
    UsersClient,
};
pub use error::Error;
pub use transport::{AccessToken, HttpTransport, DEFAULT_BASE_URL};
pub use types::{
    filter_issues, Branch, Contents, ContentEntry, CreateBranch, CreateIssue, CreatePullRequest,
    CreateRepo, Event, FileCommit, GitRef, Issue, IssueComment, IssueState, MergeResult,
    PullRequest, PullRequestStatus, RateLimit, Repository, SocialAccount, UpdateIssue, User,
    UserOverview, UserSearchResults, UserSummary,
};
