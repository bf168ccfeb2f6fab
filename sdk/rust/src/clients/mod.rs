//! Resource clients for the HubDeck SDK.
//!
//! Each client is a thin mapping from typed parameters to one HTTP call.
//! Listings fetch a single page (caps documented per method); no
//! pagination cursor is modeled.

pub mod branches;
pub mod contents;
pub mod issues;
pub mod meta;
pub mod pulls;
pub mod repos;
pub mod users;

// Re-exports
pub use branches::BranchesClient;
pub use contents::ContentsClient;
pub use issues::IssuesClient;
pub use meta::MetaClient;
pub use pulls::PullsClient;
pub use repos::ReposClient;
pub use users::UsersClient;
