//! HTTP client for LNURL-pay endpoints.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::PayRequestConfig;
use crate::error::{LnurlError, TransportError};
use crate::types::{FetchedPayRequest, PayRequestParameters};

/// Something that can ask an LNURL-pay endpoint for an invoice.
///
/// Abstracted so callers can be exercised without network access.
#[async_trait]
pub trait InvoiceSource: Send + Sync {
    /// Request an invoice for `amount_msat` from the pay endpoint at `url`.
    ///
    /// Makes exactly one request. Returns the decoded reply without judging
    /// whether it is payable; see [`validate_invoice`](crate::validate_invoice).
    async fn request_invoice(
        &self,
        url: &Url,
        amount_msat: u64,
        comment: &str,
    ) -> Result<FetchedPayRequest, LnurlError>;
}

/// Client for LNURL-pay endpoints.
///
/// Issues a single GET per call, with no retry or backoff.
#[derive(Clone, Debug)]
pub struct PayRequestClient {
    http: Client,
}

impl PayRequestClient {
    /// Create a client with the given configuration.
    pub fn new(config: PayRequestConfig) -> Result<Self, LnurlError> {
        let http = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(TransportError::Client)?;
        Ok(Self { http })
    }

    /// Fetch pay parameters for `amount_msat` with an attribution `comment`.
    pub async fn fetch(
        &self,
        url: &Url,
        amount_msat: u64,
        comment: &str,
    ) -> Result<FetchedPayRequest, LnurlError> {
        debug!(%url, amount_msat, "Requesting invoice from pay endpoint");

        let amount = amount_msat.to_string();
        let response = self
            .http
            .get(url.clone())
            .query(&[("amount", amount.as_str()), ("comment", comment)])
            .send()
            .await
            .map_err(TransportError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body }.into());
        }

        let raw_body = response.text().await.map_err(TransportError::Body)?;
        debug!(%status, body_len = raw_body.len(), "Pay endpoint replied");

        let parameters: PayRequestParameters = serde_json::from_str(&raw_body)?;
        Ok(FetchedPayRequest {
            parameters,
            raw_body,
        })
    }
}

#[async_trait]
impl InvoiceSource for PayRequestClient {
    async fn request_invoice(
        &self,
        url: &Url,
        amount_msat: u64,
        comment: &str,
    ) -> Result<FetchedPayRequest, LnurlError> {
        self.fetch(url, amount_msat, comment).await
    }
}
