//! Lightning address resolution and LNURL-pay invoice requests.
//!
//! This crate covers the protocol half of a donation:
//!
//! - [`LightningAddress`] - parses `user@domain` and resolves it to the
//!   well-known LNURL-pay metadata URL
//! - [`PayRequestClient`] - performs the HTTP round trip that returns an invoice
//! - [`validate_invoice`] - checks the decoded reply for a payable invoice
//!
//! # Example
//!
//! ```no_run
//! use lnurl_pay::{validate_invoice, LightningAddress, PayRequestClient, PayRequestConfig};
//!
//! # async fn example() -> Result<(), lnurl_pay::LnurlError> {
//! let address: LightningAddress = "alice@example.com".parse()?;
//! let client = PayRequestClient::new(PayRequestConfig::default())?;
//!
//! // 21 sats, expressed in millisatoshis
//! let reply = client.fetch(&address.lnurlp_url()?, 21_000, "from @bob").await?;
//! let invoice = validate_invoice(&reply.parameters, &reply.raw_body)?;
//! println!("Invoice: {}", invoice);
//! # Ok(())
//! # }
//! ```

mod address;
mod client;
mod config;
mod error;
mod types;
mod validator;

pub use address::LightningAddress;
pub use client::{InvoiceSource, PayRequestClient};
pub use config::PayRequestConfig;
pub use error::{LnurlError, TransportError};
pub use types::{FetchedPayRequest, PayRequestParameters, PayStatus};
pub use validator::validate_invoice;

// Re-export async_trait for InvoiceSource implementors
pub use async_trait::async_trait;

/// Millisatoshis per satoshi.
pub const MSATS_PER_SAT: u64 = 1000;
