//! Repositories resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{CreateRepo, Repository};

/// Page size for repository listings.
const PAGE_SIZE: &str = "100";

/// Client for repository-related operations.
pub struct ReposClient {
    transport: Arc<HttpTransport>,
}

impl ReposClient {
    /// Create a new repos client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List the authenticated user's repositories, sorted by last update,
    /// one page of up to 100.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_own(&self) -> Result<Vec<Repository>, Error> {
        let params = [("sort", "updated"), ("per_page", PAGE_SIZE)];

        self.transport
            .request(Method::GET, "/user/repos", Some(&params), None::<&()>)
            .await
    }

    /// Create a repository under the authenticated user.
    ///
    /// # Arguments
    ///
    /// * `name` - Repository name
    /// * `description` - Optional repository description
    /// * `private` - Whether the repository should be private
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails (e.g., the name is taken).
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        private: bool,
    ) -> Result<Repository, Error> {
        let payload = CreateRepo {
            name: name.to_string(),
            description: description.map(String::from),
            private,
        };

        self.transport
            .request(Method::POST, "/user/repos", None, Some(&payload))
            .await
    }

    /// Fetch one repository by owner and name.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository does not exist or is not visible
    /// to the credential.
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Repository, Error> {
        self.transport
            .request(
                Method::GET,
                &format!("/repos/{owner}/{repo}"),
                None,
                None::<&()>,
            )
            .await
    }
}
