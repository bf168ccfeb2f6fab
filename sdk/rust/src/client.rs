//! HubDeck SDK main client.
//!
//! Provides the primary interface for interacting with the GitHub REST API.

use std::sync::Arc;

use crate::clients::{
    BranchesClient, ContentsClient, IssuesClient, MetaClient, PullsClient, ReposClient,
    UsersClient,
};
use crate::error::Error;
use crate::transport::{AccessToken, HttpTransport, DEFAULT_BASE_URL};

/// Main client for interacting with the GitHub REST API.
///
/// Aggregates all resource clients over one transport holding one
/// credential. The credential is immutable for the client's lifetime;
/// switching accounts means constructing a new client. Instances are safe
/// to share across concurrent calls since no call mutates client state.
///
/// # Example
///
/// ```rust,ignore
/// use hubdeck::{AccessToken, GitHubClient};
///
/// let token = AccessToken::new(std::env::var("GITHUB_TOKEN")?)?;
/// let client = GitHubClient::new(token, None)?;
///
/// let me = client.users().authenticated().await?;
/// let repos = client.repos().list_own().await?;
/// ```
pub struct GitHubClient {
    transport: Arc<HttpTransport>,
    users: UsersClient,
    repos: ReposClient,
    branches: BranchesClient,
    contents: ContentsClient,
    issues: IssuesClient,
    pulls: PullsClient,
    meta: MetaClient,
}

impl GitHubClient {
    /// Create a new GitHub client.
    ///
    /// # Arguments
    ///
    /// * `token` - The personal access token authorizing every call
    /// * `base_url` - Base URL for API requests (default: <https://api.github.com>)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(token: AccessToken, base_url: Option<&str>) -> Result<Self, Error> {
        let transport = Arc::new(HttpTransport::new(
            base_url.unwrap_or(DEFAULT_BASE_URL),
            token,
        )?);

        Ok(Self {
            users: UsersClient::new(Arc::clone(&transport)),
            repos: ReposClient::new(Arc::clone(&transport)),
            branches: BranchesClient::new(Arc::clone(&transport)),
            contents: ContentsClient::new(Arc::clone(&transport)),
            issues: IssuesClient::new(Arc::clone(&transport)),
            pulls: PullsClient::new(Arc::clone(&transport)),
            meta: MetaClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Get the underlying HTTP transport (for advanced use cases).
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Get the users client.
    #[must_use]
    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    /// Get the repos client.
    #[must_use]
    pub fn repos(&self) -> &ReposClient {
        &self.repos
    }

    /// Get the branches client.
    #[must_use]
    pub fn branches(&self) -> &BranchesClient {
        &self.branches
    }

    /// Get the contents client.
    #[must_use]
    pub fn contents(&self) -> &ContentsClient {
        &self.contents
    }

    /// Get the issues client.
    #[must_use]
    pub fn issues(&self) -> &IssuesClient {
        &self.issues
    }

    /// Get the pulls client.
    #[must_use]
    pub fn pulls(&self) -> &PullsClient {
        &self.pulls
    }

    /// Get the meta client.
    #[must_use]
    pub fn meta(&self) -> &MetaClient {
        &self.meta
    }
}
