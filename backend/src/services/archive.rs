//! Zip archive fetch service.
//!
//! Re-issues one GitHub request per download using the caller's
//! credential. The credential arrives with each request and is never
//! stored server-side.

use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Media type requested from GitHub.
const ACCEPT_HEADER: &str = "application/vnd.github+json";

const USER_AGENT: &str = concat!("hubdeck-backend/", env!("CARGO_PKG_VERSION"));

/// Errors surfaced while fetching an archive from GitHub.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Non-2xx response from GitHub, with the raw response body.
    #[error("GitHub API Error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// The request never completed (connection, TLS, DNS).
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The configured API base URL cannot take path segments.
    #[error("invalid API base URL: {0}")]
    BaseUrl(String),

    /// The HTTP client could not be created.
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Fetches repository zip archives from GitHub on behalf of a caller.
#[derive(Debug, Clone)]
pub struct ArchiveService {
    client: Client,
    api_base: Url,
}

impl ArchiveService {
    /// Create a new archive service against the given API base.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be created.
    pub fn new(api_base: &str) -> Result<Self, ArchiveError> {
        let api_base = Url::parse(api_base).map_err(|e| ArchiveError::BaseUrl(e.to_string()))?;

        let client = Client::builder()
            .build()
            .map_err(|e| ArchiveError::Client(e.to_string()))?;

        Ok(Self { client, api_base })
    }

    /// Fetch the zip archive of a repository branch.
    ///
    /// The authorization header value is forwarded to GitHub verbatim.
    /// Owner, repo and branch land in the URL as percent-encoded path
    /// segments, so a branch name containing `/` stays one segment.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::Upstream` carrying GitHub's status and body
    /// text for any non-2xx answer, or `ArchiveError::Transport` when the
    /// request itself fails.
    pub async fn fetch_zipball(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        authorization: &str,
    ) -> Result<Vec<u8>, ArchiveError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| ArchiveError::BaseUrl("API base cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(["repos", owner, repo, "zipball", branch]);

        tracing::debug!(owner, repo, branch, "relaying zipball fetch");

        let response = self
            .client
            .get(url)
            .header("Authorization", authorization)
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| ArchiveError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(ArchiveError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ArchiveError::Transport(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

/// Download filename for a repo/branch pair.
///
/// Both parts are restricted to `[A-Za-z0-9._-]` before landing in a
/// `Content-Disposition` header; anything else becomes an underscore.
#[must_use]
pub fn archive_filename(repo: &str, branch: &str) -> String {
    format!("{}-{}.zip", sanitize(repo), sanitize(branch))
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
