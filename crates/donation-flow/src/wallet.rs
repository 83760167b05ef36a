//! Wallet capability used to settle invoices.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::WalletError;

/// Parameters of a wallet payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentParams {
    /// `true` for an outgoing payment.
    pub out: bool,
    /// BOLT11 invoice to pay.
    pub bolt11: String,
}

impl PaymentParams {
    /// An outgoing payment of `bolt11`.
    pub fn outgoing(bolt11: impl Into<String>) -> Self {
        Self {
            out: true,
            bolt11: bolt11.into(),
        }
    }
}

/// A settled payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub payment_hash: String,
}

/// A wallet that can pay invoices.
#[async_trait]
pub trait PaymentWallet: Send + Sync {
    /// Pay an invoice. Called at most once per donation.
    async fn pay(&self, params: PaymentParams) -> Result<Payment, WalletError>;
}
