//! Error types for LNURL-pay operations.

use thiserror::Error;

/// Errors that can occur while resolving an address or requesting an invoice.
#[derive(Debug, Error)]
pub enum LnurlError {
    /// The lightning address is not of the form `user@domain`.
    #[error("Invalid lightning address '{address}': {reason}")]
    InvalidAddress {
        address: String,
        reason: &'static str,
    },

    /// The HTTP round trip to the pay endpoint failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The pay endpoint replied with a body that is not a pay response.
    #[error("Malformed pay response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The pay endpoint reported an error or returned no invoice.
    #[error("Pay endpoint error: {}", .reason.as_deref().unwrap_or("no invoice returned"))]
    PayEndpoint {
        reason: Option<String>,
        /// Raw response body, kept for diagnostics.
        body: String,
    },
}

/// Underlying cause of a [`LnurlError::Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// Building the HTTP client failed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent (connection refused, DNS, timeout).
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Reading the response body failed.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}
