//! Error types for the donation flow.

use lnurl_pay::LnurlError;
use thiserror::Error;

/// Errors that end a donation attempt.
///
/// All variants are terminal for the attempt; nothing is retried.
#[derive(Debug, Error)]
pub enum DonationError {
    /// No usable amount outside a private chat.
    #[error("no donation amount given")]
    MissingAmount,

    /// The donor has no wallet to pay from.
    #[error("user has no wallet")]
    NoWallet,

    /// Address resolution, the pay request or its validation failed.
    #[error(transparent)]
    Lnurl(#[from] LnurlError),

    /// The wallet refused or failed to pay the invoice.
    #[error("payment failed: {0}")]
    Payment(#[from] WalletError),

    /// Asking the user for an amount failed.
    #[error("failed to prompt for amount: {0}")]
    Prompt(#[source] MessengerError),
}

/// Flat classification of a [`DonationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationErrorKind {
    MissingAmount,
    NoWallet,
    InvalidAddress,
    Transport,
    MalformedResponse,
    PayEndpoint,
    Payment,
    Prompt,
}

impl DonationError {
    pub fn kind(&self) -> DonationErrorKind {
        match self {
            Self::MissingAmount => DonationErrorKind::MissingAmount,
            Self::NoWallet => DonationErrorKind::NoWallet,
            Self::Lnurl(LnurlError::InvalidAddress { .. }) => DonationErrorKind::InvalidAddress,
            Self::Lnurl(LnurlError::Transport(_)) => DonationErrorKind::Transport,
            Self::Lnurl(LnurlError::MalformedResponse(_)) => DonationErrorKind::MalformedResponse,
            Self::Lnurl(LnurlError::PayEndpoint { .. }) => DonationErrorKind::PayEndpoint,
            Self::Payment(_) => DonationErrorKind::Payment,
            Self::Prompt(_) => DonationErrorKind::Prompt,
        }
    }
}

/// Errors reported by a [`Messenger`](crate::Messenger).
#[derive(Debug, Error)]
pub enum MessengerError {
    #[error("send failed: {0}")]
    SendFailed(String),

    #[error("edit failed: {0}")]
    EditFailed(String),

    #[error("delete failed: {0}")]
    DeleteFailed(String),
}

/// Errors reported by a [`PaymentWallet`](crate::PaymentWallet).
#[derive(Debug, Error)]
pub enum WalletError {
    /// The backend refused the payment.
    #[error("payment rejected: {0}")]
    Rejected(String),

    /// HTTP request to the wallet backend failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The wallet backend replied with an unexpected body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
