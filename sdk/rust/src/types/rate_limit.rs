//! Rate limit data models.

use serde::{Deserialize, Serialize};

/// Rate limit snapshot for one resource.
///
/// Advisory only: the SDK neither enforces nor tracks it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimit {
    /// Maximum requests per window
    pub limit: u32,
    /// Requests remaining in the current window
    pub remaining: u32,
    /// Unix epoch second at which the window resets
    pub reset: u64,
    /// Requests already used
    pub used: u32,
}

/// Per-resource rate limit table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResources {
    /// The core REST API resource
    pub core: RateLimit,
}

/// Response of the rate limit endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResponse {
    pub resources: RateLimitResources,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_response_deserialize() {
        let json = r#"{
            "resources": {
                "core": {"limit": 5000, "remaining": 4999, "reset": 1706000000, "used": 1},
                "search": {"limit": 30, "remaining": 30, "reset": 1706000000, "used": 0}
            },
            "rate": {"limit": 5000, "remaining": 4999, "reset": 1706000000, "used": 1}
        }"#;

        let response: RateLimitResponse = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(response.resources.core.limit, 5000);
        assert_eq!(response.resources.core.remaining, 4999);
    }
}
