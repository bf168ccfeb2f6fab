//! Pull requests resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{CreatePullRequest, MergeResult, PullRequest};

/// Page size for pull request listings.
const PAGE_SIZE: &str = "100";

/// Client for pull request operations.
pub struct PullsClient {
    transport: Arc<HttpTransport>,
}

impl PullsClient {
    /// Create a new pulls client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List the pull requests of a repository, one page of up to 100.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>, Error> {
        let params = [("per_page", PAGE_SIZE)];

        self.transport
            .request(
                Method::GET,
                &format!("/repos/{owner}/{repo}/pulls"),
                Some(&params),
                None::<&()>,
            )
            .await
    }

    /// Open a pull request.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `title` - Pull request title
    /// * `head` - Source branch name
    /// * `base` - Target branch name
    /// * `body` - Optional pull request body
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails (e.g., no commits between the
    /// branches).
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        head: &str,
        base: &str,
        body: Option<&str>,
    ) -> Result<PullRequest, Error> {
        let payload = CreatePullRequest {
            title: title.to_string(),
            head: head.to_string(),
            base: base.to_string(),
            body: body.map(String::from),
        };

        self.transport
            .request(
                Method::POST,
                &format!("/repos/{owner}/{repo}/pulls"),
                None,
                Some(&payload),
            )
            .await
    }

    /// Merge a pull request by number.
    ///
    /// No merge-method choice and no conflict resolution: when upstream
    /// cannot merge, the call fails with the upstream status.
    ///
    /// # Errors
    ///
    /// Returns an error if the merge is rejected.
    pub async fn merge(&self, owner: &str, repo: &str, number: u64) -> Result<MergeResult, Error> {
        self.transport
            .request(
                Method::PUT,
                &format!("/repos/{owner}/{repo}/pulls/{number}/merge"),
                None,
                None::<&()>,
            )
            .await
    }
}
