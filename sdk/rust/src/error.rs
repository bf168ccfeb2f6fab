//! Error types for the HubDeck SDK.

use thiserror::Error;

/// Main error type for the HubDeck SDK.
///
/// The GitHub API reports failures as plain HTTP statuses with a text body;
/// the SDK carries both through unmodified in [`Error::Upstream`] and leaves
/// interpretation (401 means re-authenticate, 404 means absent, 422 means
/// validation) to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx response from the GitHub API, with the raw response body.
    #[error("GitHub API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// HTTP transport failure (connection, TLS, DNS) or a response body
    /// that could not be decoded into the declared shape.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// HTTP status of the upstream failure, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether GitHub reported the resource as absent (404).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether GitHub rejected the credential or the permission (401/403).
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
