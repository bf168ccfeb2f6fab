//! Repository contents resource client.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Method;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Contents, FileCommit, UploadFile};

/// Client for repository content operations.
pub struct ContentsClient {
    transport: Arc<HttpTransport>,
}

impl ContentsClient {
    /// Create a new contents client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the contents at a path.
    ///
    /// The result is polymorphic on what the path names: a directory
    /// yields [`Contents::Directory`], a file [`Contents::File`]. Callers
    /// must branch on the variant.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `path` - Path within the repository; empty for the root
    /// * `reference` - Branch, tag or sha to read from (repository default
    ///   branch when omitted)
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or the request fails.
    pub async fn get(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<Contents, Error> {
        let params = reference.map(|r| vec![("ref", r)]);

        self.transport
            .request(
                Method::GET,
                &format!("/repos/{owner}/{repo}/contents/{path}"),
                params.as_deref(),
                None::<&()>,
            )
            .await
    }

    /// Create or update a file at a path.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `path` - Path of the file to write
    /// * `content_base64` - Base64-encoded file content (see
    ///   [`encode_content`])
    /// * `message` - Commit message
    /// * `branch` - Target branch (repository default branch when omitted)
    /// * `sha` - Current blob sha; required when updating an existing
    ///   file, and enforced upstream rather than here
    ///
    /// # Errors
    ///
    /// Returns an error if the commit is rejected (e.g., a stale or
    /// missing sha on update).
    pub async fn upload(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        content_base64: &str,
        message: &str,
        branch: Option<&str>,
        sha: Option<&str>,
    ) -> Result<FileCommit, Error> {
        let payload = UploadFile {
            message: message.to_string(),
            content: content_base64.to_string(),
            branch: branch.map(String::from),
            sha: sha.map(String::from),
        };

        self.transport
            .request(
                Method::PUT,
                &format!("/repos/{owner}/{repo}/contents/{path}"),
                None,
                Some(&payload),
            )
            .await
    }
}

/// Base64-encode raw bytes for a file upload.
#[must_use]
pub fn encode_content(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_content() {
        assert_eq!(encode_content(b"hello world"), "aGVsbG8gd29ybGQ=");
        assert_eq!(encode_content(b""), "");
    }
}
