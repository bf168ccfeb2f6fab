//! Meta resource client.

use std::sync::Arc;

use reqwest::Method;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::rate_limit::{RateLimit, RateLimitResponse};

/// Client for API metadata.
pub struct MetaClient {
    transport: Arc<HttpTransport>,
}

impl MetaClient {
    /// Create a new meta client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the current rate limit snapshot for the core REST resource.
    ///
    /// Advisory only; nothing in the SDK acts on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn rate_limit(&self) -> Result<RateLimit, Error> {
        let response: RateLimitResponse = self
            .transport
            .request(Method::GET, "/rate_limit", None, None::<&()>)
            .await?;

        Ok(response.resources.core)
    }
}
