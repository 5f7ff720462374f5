//! Client configuration.

use crate::core::domain::error::{UpcloudResult, ValidationError};
use std::time::Duration;

/// API version every request path is prefixed with.
pub const DEFAULT_API_VERSION: &str = "1.2";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client-side pacing of outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained number of requests per second.
    pub requests_per_second: u32,
    /// Number of requests that may be sent back to back before pacing starts.
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.requests_per_second == 0 {
            return Err(ValidationError::Field {
                field: "requests_per_second".to_string(),
                message: "Rate limit must allow at least one request per second".to_string(),
            });
        }
        if self.burst_size == 0 {
            return Err(ValidationError::Field {
                field: "burst_size".to_string(),
                message: "Burst size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Transport settings; credentials and host live on the connection.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API version path segment (e.g., "1.2").
    pub api_version: String,
    /// Timeout for a single HTTP request.
    pub timeout: Duration,
    /// Optional request pacing; disabled when `None`.
    pub rate_limit: Option<RateLimitConfig>,
}

impl ClientConfig {
    pub(crate) fn validate(&self) -> UpcloudResult<()> {
        if self.api_version.trim_matches('/').is_empty() {
            return Err(ValidationError::Field {
                field: "api_version".to_string(),
                message: "API version cannot be empty".to_string(),
            }
            .into());
        }
        if self.timeout.is_zero() {
            return Err(ValidationError::Field {
                field: "timeout".to_string(),
                message: "Timeout must be greater than zero".to_string(),
            }
            .into());
        }
        if let Some(rate_limit) = &self.rate_limit {
            rate_limit.validate()?;
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            rate_limit: None,
        }
    }
}
