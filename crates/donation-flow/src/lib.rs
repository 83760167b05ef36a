//! Donation flow for a chat bot.
//!
//! A user sends `/donate <amount>`; the bot resolves a fixed lightning address
//! to its LNURL-pay endpoint, requests an invoice for that amount and pays it
//! from the user's wallet, keeping the user informed through a single
//! editable progress message.
//!
//! The chat transport and the wallet backend are external collaborators,
//! reached through the narrow [`Messenger`] and [`PaymentWallet`] traits.
//!
//! # Flow
//!
//! ```text
//! /donate 100
//!      ↓
//! AwaitingAmount ── no amount, private chat ──→ ask for amount (suspend)
//!      ↓
//! Preparing      ── sats → msats, wallet present, send progress message
//!      ↓
//! Resolving      ── user@domain → https://domain/.well-known/lnurlp/user
//!      ↓
//! Requesting     ── GET ?amount=<msats>&comment=<text>
//!      ↓
//! Validating     ── status != ERROR and non-empty invoice
//!      ↓
//! Paying         ── wallet.pay(out = true, bolt11)
//!      ↓
//! Succeeded      ── delete progress message, send thank-you
//! ```
//!
//! Any failure goes through one handler that logs the cause and edits the
//! progress message to a generic "donation failed" notice.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use donation_flow::{DonationCommand, DonationConfig, DonationFlow};
//! use lnurl_pay::{PayRequestClient, PayRequestConfig};
//!
//! let flow = DonationFlow::new(
//!     Arc::new(my_messenger),
//!     Arc::new(PayRequestClient::new(PayRequestConfig::default())?),
//!     DonationConfig::new(bot_user),
//! );
//! let outcome = flow.donate(&command).await?;
//! ```

mod alias;
mod chat;
mod command;
mod error;
mod flow;
mod lnbits;
mod messenger;
mod notices;
mod wallet;

pub use alias::{AliasReport, DonationStatus};
pub use chat::{Chat, ChatId, ChatKind, ChatUser, MessageHandle};
pub use command::{canonical_command, parse_amount, DonationCommand, MAX_DONATION_SATS};
pub use error::{DonationError, DonationErrorKind, MessengerError, WalletError};
pub use flow::{
    DonationConfig, DonationFlow, DonationOutcome, DonationRequest, FIXED_LIGHTNING_ADDRESS,
    FIXED_RECIPIENT_HANDLE,
};
pub use lnbits::{LnbitsConfig, LnbitsWallet};
pub use messenger::{AmountPrompt, LoggingMessenger, Messenger, CREATE_DONATION_STATE};
pub use notices::{help_donate_usage, markdown_escape, English, Notice, Translations};
pub use wallet::{Payment, PaymentParams, PaymentWallet};

// Re-export async_trait for collaborator implementations
pub use async_trait::async_trait;
