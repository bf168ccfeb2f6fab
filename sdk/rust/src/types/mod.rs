//! Data model types for the HubDeck SDK.
//!
//! Every type is a point-in-time snapshot of a GitHub resource: the SDK
//! marshals it for a single request/response cycle and performs no
//! synchronization afterwards. Re-fetching is the only freshness mechanism.

pub mod branches;
pub mod contents;
pub mod issues;
pub mod pulls;
pub mod rate_limit;
pub mod repos;
pub mod users;

// Re-exports
pub use branches::{Branch, BranchCommit, CreateBranch, GitObject, GitRef};
pub use contents::{CommitInfo, ContentEntry, ContentType, Contents, FileCommit, UploadFile};
pub use issues::{
    filter_issues, CreateIssue, CreateIssueComment, Issue, IssueComment, IssueState, Label,
    UpdateIssue,
};
pub use pulls::{
    CreatePullRequest, MergeResult, PullRequest, PullRequestRef, PullRequestState,
    PullRequestStatus,
};
pub use rate_limit::RateLimit;
pub use repos::{CreateRepo, Repository, RepositoryOwner};
pub use users::{
    Event, EventActor, EventRepo, SocialAccount, User, UserOverview, UserSearchResults,
    UserSummary,
};
