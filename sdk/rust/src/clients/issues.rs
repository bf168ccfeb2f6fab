//! Issues resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{CreateIssue, CreateIssueComment, Issue, IssueComment, UpdateIssue};

/// Page size for issue listings.
const PAGE_SIZE: &str = "100";

/// Client for issue operations.
pub struct IssuesClient {
    transport: Arc<HttpTransport>,
}

impl IssuesClient {
    /// Create a new issues client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List the issues of a repository, one page of up to 100.
    ///
    /// Pull requests come co-mingled in this listing; entries carrying the
    /// `pull_request` marker are PRs. Use `filter_issues` for pure issues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, owner: &str, repo: &str) -> Result<Vec<Issue>, Error> {
        let params = [("per_page", PAGE_SIZE)];

        self.transport
            .request(
                Method::GET,
                &format!("/repos/{owner}/{repo}/issues"),
                Some(&params),
                None::<&()>,
            )
            .await
    }

    /// Open an issue.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails.
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: Option<&str>,
    ) -> Result<Issue, Error> {
        let payload = CreateIssue {
            title: title.to_string(),
            body: body.map(String::from),
        };

        self.transport
            .request(
                Method::POST,
                &format!("/repos/{owner}/{repo}/issues"),
                None,
                Some(&payload),
            )
            .await
    }

    /// Update an issue's mutable fields by number.
    ///
    /// Fields left unset in `update` keep their current value; closing an
    /// issue is `UpdateIssue { state: Some(IssueState::Closed), ..Default::default() }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue does not exist or the update is
    /// rejected.
    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &UpdateIssue,
    ) -> Result<Issue, Error> {
        self.transport
            .request(
                Method::PATCH,
                &format!("/repos/{owner}/{repo}/issues/{number}"),
                None,
                Some(update),
            )
            .await
    }

    /// Add a comment to an issue by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue does not exist or the comment is
    /// rejected.
    pub async fn comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<IssueComment, Error> {
        let payload = CreateIssueComment {
            body: body.to_string(),
        };

        self.transport
            .request(
                Method::POST,
                &format!("/repos/{owner}/{repo}/issues/{number}/comments"),
                None,
                Some(&payload),
            )
            .await
    }
}
