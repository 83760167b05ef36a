//! Protocol-level validation of pay replies.

use tracing::debug;

use crate::error::LnurlError;
use crate::types::PayRequestParameters;

/// Return the invoice if the reply is payable.
///
/// A reply is payable when its status is not `ERROR` and it carries a
/// non-empty invoice. `raw_body` is attached to the error for diagnostics.
pub fn validate_invoice(params: &PayRequestParameters, raw_body: &str) -> Result<String, LnurlError> {
    match params.pr.as_deref() {
        Some(pr) if !params.is_error() && !pr.is_empty() => {
            debug!(invoice_len = pr.len(), "Pay endpoint returned an invoice");
            Ok(pr.to_string())
        }
        _ => Err(LnurlError::PayEndpoint {
            reason: params.reason.clone(),
            body: raw_body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PayStatus;

    fn parse(json: &str) -> PayRequestParameters {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_accepts_ok_with_invoice() {
        let body = r#"{"status":"OK","pr":"lnbc1qwerty"}"#;
        assert_eq!(validate_invoice(&parse(body), body).unwrap(), "lnbc1qwerty");
    }

    #[test]
    fn test_accepts_missing_status_with_invoice() {
        let body = r#"{"pr":"lnbc1qwerty"}"#;
        assert!(validate_invoice(&parse(body), body).is_ok());
    }

    #[test]
    fn test_rejects_error_status() {
        let body = r#"{"status":"ERROR","reason":"recipient offline"}"#;
        match validate_invoice(&parse(body), body) {
            Err(LnurlError::PayEndpoint { reason, body: raw }) => {
                assert_eq!(reason.as_deref(), Some("recipient offline"));
                assert_eq!(raw, body);
            }
            other => panic!("Expected PayEndpoint error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_error_status_even_with_invoice() {
        let params = PayRequestParameters {
            status: Some(PayStatus::Error),
            pr: Some("lnbc1qwerty".to_string()),
            ..Default::default()
        };
        assert!(validate_invoice(&params, "").is_err());
    }

    #[test]
    fn test_rejects_empty_invoice() {
        let body = r#"{"status":"OK","pr":""}"#;
        assert!(matches!(
            validate_invoice(&parse(body), body),
            Err(LnurlError::PayEndpoint { .. })
        ));
    }

    #[test]
    fn test_rejects_missing_invoice() {
        let body = r#"{"status":"OK"}"#;
        assert!(validate_invoice(&parse(body), body).is_err());
    }
}
