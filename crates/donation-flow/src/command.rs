//! Donation commands and amount parsing.

use std::fmt;
use std::sync::Arc;

use lnurl_pay::MSATS_PER_SAT;

use crate::chat::{Chat, ChatUser};
use crate::wallet::PaymentWallet;

/// Largest amount in sats that still fits in millisatoshis.
pub const MAX_DONATION_SATS: u64 = u64::MAX / MSATS_PER_SAT;

/// A donation command as received from the chat.
#[derive(Clone)]
pub struct DonationCommand {
    pub sender: ChatUser,
    pub chat: Chat,
    /// Full command text, e.g. `/donate 100`.
    pub text: String,
    /// The sender's wallet, if they have one.
    pub wallet: Option<Arc<dyn PaymentWallet>>,
}

impl DonationCommand {
    pub fn new(sender: ChatUser, chat: Chat, text: impl Into<String>) -> Self {
        Self {
            sender,
            chat,
            text: text.into(),
            wallet: None,
        }
    }

    /// Attach the sender's wallet.
    pub fn with_wallet(mut self, wallet: Arc<dyn PaymentWallet>) -> Self {
        self.wallet = Some(wallet);
        self
    }
}

impl fmt::Debug for DonationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DonationCommand")
            .field("sender", &self.sender)
            .field("chat", &self.chat)
            .field("text", &self.text)
            .field("has_wallet", &self.wallet.is_some())
            .finish()
    }
}

/// Extract the donation amount (in sats) from command text.
///
/// The amount is the first argument after the command word. A trailing `k`
/// multiplies by 1000. Returns `None` for missing, non-numeric, zero or
/// negative amounts, and for amounts too large to express in millisatoshis.
///
/// ```
/// use donation_flow::parse_amount;
///
/// assert_eq!(parse_amount("/donate 100"), Some(100));
/// assert_eq!(parse_amount("/donate 2k"), Some(2000));
/// assert_eq!(parse_amount("/donate"), None);
/// ```
pub fn parse_amount(text: &str) -> Option<u64> {
    let arg = text.split_whitespace().nth(1)?;

    let (digits, multiplier) = match arg.strip_suffix(&['k', 'K'][..]) {
        Some(digits) => (digits, 1000),
        None => (arg, 1),
    };

    let amount = digits.parse::<u64>().ok()?.checked_mul(multiplier)?;
    if amount == 0 || amount > MAX_DONATION_SATS {
        return None;
    }
    Some(amount)
}

/// The canonical `/donate` command for an optional amount.
pub fn canonical_command(amount: Option<u64>) -> String {
    match amount {
        Some(amount) => format!("/donate {}", amount),
        None => "/donate".to_string(),
    }
}
