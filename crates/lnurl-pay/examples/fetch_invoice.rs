//! Request an invoice from a lightning address without paying it.
//!
//! Run with: cargo run -p lnurl-pay --example fetch_invoice -- alice@example.com 21
//!
//! Configuration via .env file or environment variables:
//!   LNURL_HTTP_TIMEOUT_SECS - request timeout (default: 10)
//!   LNURL_USER_AGENT        - user agent string

use std::env;

use lnurl_pay::{validate_invoice, LightningAddress, PayRequestClient, PayRequestConfig, MSATS_PER_SAT};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "lnurl_pay=debug".into()))
        .init();

    let mut args = env::args().skip(1);
    let address: LightningAddress = args
        .next()
        .ok_or("usage: fetch_invoice <user@domain> <sats>")?
        .parse()?;
    let sats: u64 = args.next().unwrap_or_else(|| "1".to_string()).parse()?;
    let amount_msat = sats
        .checked_mul(MSATS_PER_SAT)
        .ok_or("amount too large to express in millisatoshis")?;

    let url = address.lnurlp_url()?;
    println!("Pay endpoint: {}", url);

    let client = PayRequestClient::new(PayRequestConfig::from_env())?;
    let reply = client
        .fetch(&url, amount_msat, "fetch_invoice example")
        .await?;
    let invoice = validate_invoice(&reply.parameters, &reply.raw_body)?;

    println!("Invoice for {} sats:\n{}", sats, invoice);
    Ok(())
}
