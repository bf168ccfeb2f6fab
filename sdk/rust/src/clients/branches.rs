//! Branches resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Branch, CreateBranch, GitRef};

/// Page size for branch listings.
const PAGE_SIZE: &str = "100";

/// Client for branch operations.
pub struct BranchesClient {
    transport: Arc<HttpTransport>,
}

impl BranchesClient {
    /// Create a new branches client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List the branches of a repository, one page of up to 100.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, owner: &str, repo: &str) -> Result<Vec<Branch>, Error> {
        let params = [("per_page", PAGE_SIZE)];

        self.transport
            .request(
                Method::GET,
                &format!("/repos/{owner}/{repo}/branches"),
                Some(&params),
                None::<&()>,
            )
            .await
    }

    /// Create a branch pointing at an existing commit.
    ///
    /// The caller resolves `sha` first (typically the head commit of the
    /// branch being forked from); no resolution happens here.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `branch` - New branch name (unqualified; "refs/heads/" is prepended)
    /// * `sha` - Commit sha the new branch points at
    ///
    /// # Errors
    ///
    /// Returns an error if the ref already exists or the sha is unknown.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<GitRef, Error> {
        let payload = CreateBranch {
            ref_name: format!("refs/heads/{branch}"),
            sha: sha.to_string(),
        };

        self.transport
            .request(
                Method::POST,
                &format!("/repos/{owner}/{repo}/git/refs"),
                None,
                Some(&payload),
            )
            .await
    }
}
