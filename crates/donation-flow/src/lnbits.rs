//! LNbits wallet backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::WalletError;
use crate::wallet::{Payment, PaymentParams, PaymentWallet};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for one LNbits wallet.
#[derive(Debug, Clone)]
pub struct LnbitsConfig {
    /// Base URL of the LNbits instance (e.g., "https://legend.lnbits.com").
    pub url: String,
    /// Admin key of the wallet; required for outgoing payments.
    pub admin_key: String,
    pub timeout: Duration,
}

impl LnbitsConfig {
    pub fn new(url: impl Into<String>, admin_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            admin_key: admin_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create an LNbits configuration from environment variables.
    ///
    /// Expects:
    /// - `LNBITS_URL` - The LNbits server URL
    /// - `LNBITS_ADMIN_KEY` - The wallet admin key
    /// - `LNBITS_HTTP_TIMEOUT_SECS` - Request timeout (optional, defaults to 60)
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let mut config = Self::new(
            std::env::var("LNBITS_URL")?,
            std::env::var("LNBITS_ADMIN_KEY")?,
        );
        if let Some(secs) = std::env::var("LNBITS_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    fn payments_url(&self) -> String {
        format!("{}/api/v1/payments", self.url.trim_end_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
struct PaymentResponse {
    payment_hash: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: String,
}

/// A user's LNbits wallet.
#[derive(Clone)]
pub struct LnbitsWallet {
    http: Client,
    config: LnbitsConfig,
}

impl LnbitsWallet {
    pub fn new(config: LnbitsConfig) -> Result<Self, WalletError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl PaymentWallet for LnbitsWallet {
    async fn pay(&self, params: PaymentParams) -> Result<Payment, WalletError> {
        let url = self.config.payments_url();
        debug!(%url, out = params.out, "Submitting LNbits payment");

        let response = self
            .http
            .post(&url)
            .header("X-Api-Key", self.config.admin_key.as_str())
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let reason = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.detail)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, body));
            return Err(WalletError::Rejected(reason));
        }

        let payment: PaymentResponse = serde_json::from_str(&body)?;
        info!(payment_hash = %payment.payment_hash, "LNbits payment settled");
        Ok(Payment {
            payment_hash: payment.payment_hash,
        })
    }
}

impl std::fmt::Debug for LnbitsWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LnbitsWallet")
            .field("url", &self.config.url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn wallet(server: &MockServer) -> LnbitsWallet {
        LnbitsWallet::new(LnbitsConfig::new(server.uri(), "adminkey123")).unwrap()
    }

    #[test]
    fn test_payments_url_trims_slash() {
        let config = LnbitsConfig::new("https://lnbits.example.com/", "k");
        assert_eq!(config.payments_url(), "https://lnbits.example.com/api/v1/payments");
    }

    #[tokio::test]
    async fn test_pay_posts_outgoing_payment() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/payments"))
            .and(header("X-Api-Key", "adminkey123"))
            .and(body_json(serde_json::json!({"out": true, "bolt11": "lnbc1abc"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "payment_hash": "deadbeef",
                "checking_id": "deadbeef"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let payment = wallet(&server)
            .pay(PaymentParams::outgoing("lnbc1abc"))
            .await
            .unwrap();
        assert_eq!(payment.payment_hash, "deadbeef");
    }

    #[tokio::test]
    async fn test_pay_surfaces_lnbits_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/payments"))
            .respond_with(
                ResponseTemplate::new(520)
                    .set_body_json(serde_json::json!({"detail": "Insufficient balance."})),
            )
            .mount(&server)
            .await;

        let err = wallet(&server)
            .pay(PaymentParams::outgoing("lnbc1abc"))
            .await
            .unwrap_err();
        match err {
            WalletError::Rejected(reason) => assert_eq!(reason, "Insufficient balance."),
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_pay_rejects_plain_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/payments"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = wallet(&server)
            .pay(PaymentParams::outgoing("lnbc1abc"))
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::Rejected(ref r) if r.contains("boom")));
    }
}
