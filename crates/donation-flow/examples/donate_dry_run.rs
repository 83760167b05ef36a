//! Run a `/donate` command against the real recipient without a chat.
//!
//! Run with: cargo run -p donation-flow --example donate_dry_run -- "/donate 21"
//!
//! Configuration via .env file or environment variables:
//!   LNBITS_URL       - If set together with LNBITS_ADMIN_KEY, the invoice is
//!   LNBITS_ADMIN_KEY   really paid from that LNbits wallet
//!
//! Without LNbits settings the invoice is fetched and logged but not paid.

use std::env;
use std::sync::Arc;

use donation_flow::{
    async_trait, help_donate_usage, Chat, ChatUser, DonationCommand, DonationConfig, DonationFlow,
    DonationOutcome, English, LnbitsConfig, LnbitsWallet, LoggingMessenger, Payment,
    PaymentParams, PaymentWallet, WalletError,
};
use lnurl_pay::{PayRequestClient, PayRequestConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logs the invoice instead of paying it.
struct DryRunWallet;

#[async_trait]
impl PaymentWallet for DryRunWallet {
    async fn pay(&self, params: PaymentParams) -> Result<Payment, WalletError> {
        info!(bolt11 = %params.bolt11, "Dry run, not paying");
        Ok(Payment {
            payment_hash: "dry-run".to_string(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "donation_flow=debug,lnurl_pay=debug".into()),
        )
        .init();

    let text = env::args().nth(1).unwrap_or_else(|| "/donate 1".to_string());

    let wallet: Arc<dyn PaymentWallet> = match LnbitsConfig::from_env() {
        Ok(config) => {
            println!("Paying from LNbits wallet at {}", config.url);
            Arc::new(LnbitsWallet::new(config)?)
        }
        Err(_) => {
            println!("LNBITS_URL/LNBITS_ADMIN_KEY not set, dry run only");
            Arc::new(DryRunWallet)
        }
    };

    let flow = DonationFlow::new(
        Arc::new(LoggingMessenger::new()),
        Arc::new(PayRequestClient::new(PayRequestConfig::from_env())?),
        DonationConfig::new(ChatUser::new(1, Some("donation_dry_run"), "Dry Run")),
    );

    let donor = ChatUser::new(2, None, "Example Donor");
    let command = DonationCommand::new(donor, Chat::private(2), text).with_wallet(wallet);

    match flow.donate(&command).await {
        Ok(DonationOutcome::AwaitingAmount) => {
            println!("{}", help_donate_usage(&English, Some("No amount given.")))
        }
        Ok(outcome) => println!("Outcome: {:?}", outcome),
        Err(e) => println!("Donation failed ({:?}): {}", e.kind(), e),
    }
    Ok(())
}
