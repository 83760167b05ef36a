//! Wire types for LNURL-pay responses.

use serde::{Deserialize, Serialize};

/// Status indicator of an LNURL response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
    /// Any other value. Treated like `OK`.
    #[serde(other)]
    Other,
}

/// Decoded reply of an LNURL-pay endpoint called with an amount.
///
/// Many services omit `status` on success, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequestParameters {
    #[serde(default)]
    pub status: Option<PayStatus>,

    /// BOLT11 invoice.
    #[serde(default)]
    pub pr: Option<String>,

    /// Error reason, set alongside `status: "ERROR"`.
    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default)]
    pub success_action: Option<serde_json::Value>,

    #[serde(default)]
    pub disposable: Option<bool>,
}

impl PayRequestParameters {
    /// Whether the endpoint flagged the request as failed.
    pub fn is_error(&self) -> bool {
        self.status == Some(PayStatus::Error)
    }
}

/// A decoded pay reply together with the body it was decoded from.
#[derive(Debug, Clone)]
pub struct FetchedPayRequest {
    pub parameters: PayRequestParameters,
    pub raw_body: String,
}
