//! Configuration for the pay request client.

use std::time::Duration;

/// Default timeout for a pay request round trip.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP settings for [`PayRequestClient`](crate::PayRequestClient).
#[derive(Debug, Clone)]
pub struct PayRequestConfig {
    /// Timeout for the whole request, including reading the body.
    pub timeout: Duration,
    /// User agent sent to the pay endpoint.
    pub user_agent: String,
}

impl Default for PayRequestConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("lnurl-pay/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl PayRequestConfig {
    /// Create a configuration from environment variables.
    ///
    /// Reads (all optional):
    /// - `LNURL_HTTP_TIMEOUT_SECS` - request timeout in seconds (default: 10)
    /// - `LNURL_USER_AGENT` - user agent string
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout: std::env::var("LNURL_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: std::env::var("LNURL_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
