//! HTTP transport for the HubDeck SDK.
//!
//! Handles HTTP communication with the GitHub REST API: header injection,
//! query encoding, and normalization of non-2xx responses into
//! [`Error::Upstream`].

use std::fmt;

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Error;

/// Default base URL for the GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Versioned JSON media type requested on every call.
pub const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// API version pin sent as `X-GitHub-Api-Version`.
pub const API_VERSION: &str = "2022-11-28";

const USER_AGENT: &str = concat!("hubdeck/", env!("CARGO_PKG_VERSION"));

/// A GitHub personal access token.
///
/// Held in memory only. The `Debug` representation redacts the value so the
/// token cannot leak through logs or error output.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, Error> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::Configuration(
                "access token must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The raw token value, for building the authorization header.
    pub(crate) fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// HTTP transport layer shared by all resource clients.
///
/// Holds exactly one credential, set at construction and never mutated, so
/// a transport can be shared across concurrent calls. No timeout is applied
/// beyond the underlying client's default, and no request is ever retried:
/// every failure is terminal for that call.
pub struct HttpTransport {
    base_url: String,
    token: AccessToken,
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (e.g., "<https://api.github.com>")
    /// * `token` - The bearer credential injected into every request
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str, token: AccessToken) -> Result<Self, Error> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    /// Issue one request against the GitHub API.
    ///
    /// Injects the bearer authorization, the versioned `Accept` media type
    /// and the `X-GitHub-Api-Version` pin on every call.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - API path relative to the base URL (e.g., "/user/repos")
    /// * `params` - Query parameters
    /// * `body` - JSON request body (for POST/PUT/PATCH)
    ///
    /// # Returns
    ///
    /// The response body parsed into the declared shape. No schema
    /// validation happens beyond what deserialization requires.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upstream`] carrying the status code and the raw
    /// response text for any non-2xx status, or [`Error::Http`] when the
    /// transport itself fails.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&str, &str)]>,
        body: Option<&impl Serialize>,
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, "github api request");

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.token.reveal()))
            .header("Accept", ACCEPT_HEADER)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT);

        if let Some(p) = params {
            request = request.query(p);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await.map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Http(format!("failed to decode response body: {e}")))
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
