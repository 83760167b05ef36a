//! The donation state machine.

use std::sync::Arc;

use lnurl_pay::{validate_invoice, InvoiceSource, LightningAddress, MSATS_PER_SAT};
use tracing::{error, info, warn};

use crate::chat::{Chat, ChatId, ChatUser, MessageHandle};
use crate::command::{canonical_command, parse_amount, DonationCommand};
use crate::error::DonationError;
use crate::messenger::{AmountPrompt, Messenger, CREATE_DONATION_STATE};
use crate::notices::{English, Notice, Translations};
use crate::wallet::{Payment, PaymentParams, PaymentWallet};

/// Every donation goes to this address.
pub const FIXED_LIGHTNING_ADDRESS: &str = "kevinrav@btip.nl";

/// Chat handle of the recipient, shown to donors.
pub const FIXED_RECIPIENT_HANDLE: &str = "@kevinrav";

/// Settings for [`DonationFlow`].
#[derive(Debug, Clone)]
pub struct DonationConfig {
    /// The bot's own identity, named in the payment comment.
    pub bot: ChatUser,
}

impl DonationConfig {
    pub fn new(bot: ChatUser) -> Self {
        Self { bot }
    }
}

/// Non-error result of a donation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationOutcome {
    /// The invoice was paid.
    Paid {
        amount_msat: u64,
        invoice: String,
        payment: Payment,
    },
    /// No amount was given in a private chat; the user was asked for one.
    AwaitingAmount,
}

/// An accepted donation in flight.
#[derive(Debug, Clone)]
pub struct DonationRequest {
    pub donor: ChatUser,
    pub chat: Chat,
    pub amount_msat: u64,
    /// The single progress message, if sending it succeeded.
    pub progress: Option<MessageHandle>,
}

impl DonationRequest {
    /// Attribution comment sent to the pay endpoint.
    fn comment(&self, bot: &ChatUser) -> String {
        format!("from {} via bot {}", self.donor, bot)
    }
}

/// Drives a donation from command to settled payment.
///
/// Steps run strictly in order and each failure ends the attempt; exactly
/// one payment is attempted per accepted command.
pub struct DonationFlow {
    messenger: Arc<dyn Messenger>,
    invoices: Arc<dyn InvoiceSource>,
    translations: Arc<dyn Translations>,
    config: DonationConfig,
}

impl DonationFlow {
    /// Create a flow with English notices.
    pub fn new(
        messenger: Arc<dyn Messenger>,
        invoices: Arc<dyn InvoiceSource>,
        config: DonationConfig,
    ) -> Self {
        Self {
            messenger,
            invoices,
            translations: Arc::new(English),
            config,
        }
    }

    /// Use a different notice table.
    pub fn with_translations(mut self, translations: Arc<dyn Translations>) -> Self {
        self.translations = translations;
        self
    }

    pub fn config(&self) -> &DonationConfig {
        &self.config
    }

    pub(crate) fn text(&self, notice: Notice) -> String {
        self.translations.text(notice)
    }

    /// Handle a `/donate [amount]` command.
    pub async fn donate(&self, command: &DonationCommand) -> Result<DonationOutcome, DonationError> {
        // AwaitingAmount
        let sats = match parse_amount(&command.text) {
            Some(sats) => sats,
            None if command.chat.is_private() => return self.ask_for_amount(command).await,
            None => {
                let request = DonationRequest {
                    donor: command.sender.clone(),
                    chat: command.chat,
                    amount_msat: 0,
                    progress: None,
                };
                return Err(self.fail(&request, DonationError::MissingAmount).await);
            }
        };

        // Preparing
        let mut request = DonationRequest {
            donor: command.sender.clone(),
            chat: command.chat,
            amount_msat: sats * MSATS_PER_SAT,
            progress: None,
        };
        let wallet = match &command.wallet {
            Some(wallet) => Arc::clone(wallet),
            None => return Err(self.fail(&request, DonationError::NoWallet).await),
        };

        info!(
            user = %request.donor,
            chat = %request.chat.id,
            amount_msat = request.amount_msat,
            "Starting donation to {}",
            FIXED_LIGHTNING_ADDRESS
        );
        request.progress = self
            .try_send(request.chat.id, &self.text(Notice::DonationProgress))
            .await;

        match self.settle(&request, wallet.as_ref()).await {
            Ok((invoice, payment)) => {
                info!(
                    user = %request.donor,
                    amount_msat = request.amount_msat,
                    payment_hash = %payment.payment_hash,
                    "Donation paid"
                );
                // Succeeded
                if let Some(progress) = &request.progress {
                    self.try_delete(progress).await;
                }
                self.try_send(request.chat.id, &self.text(Notice::DonationSuccess))
                    .await;
                Ok(DonationOutcome::Paid {
                    amount_msat: request.amount_msat,
                    invoice,
                    payment,
                })
            }
            Err(err) => Err(self.fail(&request, err).await),
        }
    }

    /// Re-enter the flow with an amount the user typed after being prompted.
    pub async fn resume_with_amount(
        &self,
        mut command: DonationCommand,
        sats: u64,
    ) -> Result<DonationOutcome, DonationError> {
        command.text = canonical_command(Some(sats));
        self.donate(&command).await
    }

    /// Resolving, Requesting, Validating and Paying.
    async fn settle(
        &self,
        request: &DonationRequest,
        wallet: &dyn PaymentWallet,
    ) -> Result<(String, Payment), DonationError> {
        let url = FIXED_LIGHTNING_ADDRESS
            .parse::<LightningAddress>()
            .and_then(|address| address.lnurlp_url())?;

        let comment = request.comment(&self.config.bot);
        let reply = self
            .invoices
            .request_invoice(&url, request.amount_msat, &comment)
            .await?;

        let invoice = validate_invoice(&reply.parameters, &reply.raw_body)?;

        let payment = wallet.pay(PaymentParams::outgoing(invoice.as_str())).await?;
        Ok((invoice, payment))
    }

    async fn ask_for_amount(
        &self,
        command: &DonationCommand,
    ) -> Result<DonationOutcome, DonationError> {
        let prompt = AmountPrompt {
            state: CREATE_DONATION_STATE,
            command_text: command.text.clone(),
            text: self.text(Notice::EnterAmount),
        };
        match self.messenger.ask_for_amount(command.chat.id, &prompt).await {
            Ok(()) => {
                info!(user = %command.sender, "No donation amount given, asked user for one");
                Ok(DonationOutcome::AwaitingAmount)
            }
            Err(e) => {
                error!(user = %command.sender, error = %e, "Failed to ask for donation amount");
                Err(DonationError::Prompt(e))
            }
        }
    }

    /// The single failure transition: log the cause with context, then show
    /// the generic failure notice (editing the progress message if there is one).
    async fn fail(&self, request: &DonationRequest, err: DonationError) -> DonationError {
        error!(
            user = %request.donor,
            chat = %request.chat.id,
            amount_msat = request.amount_msat,
            kind = ?err.kind(),
            error = %err,
            "[/donate] Donation failed"
        );

        let notice = self.text(Notice::DonationError);
        match &request.progress {
            Some(progress) => self.try_edit(progress, &notice).await,
            None => {
                self.try_send(request.chat.id, &notice).await;
            }
        }
        err
    }

    pub(crate) async fn try_send(&self, chat: ChatId, text: &str) -> Option<MessageHandle> {
        match self.messenger.send(chat, text).await {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(%chat, error = %e, "Failed to send message");
                None
            }
        }
    }

    async fn try_edit(&self, message: &MessageHandle, text: &str) {
        if let Err(e) = self.messenger.edit(message, text).await {
            warn!(chat = %message.chat, message_id = message.message_id, error = %e, "Failed to edit message");
        }
    }

    async fn try_delete(&self, message: &MessageHandle) {
        if let Err(e) = self.messenger.delete(message).await {
            warn!(chat = %message.chat, message_id = message.message_id, error = %e, "Failed to delete message");
        }
    }
}

impl std::fmt::Debug for DonationFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DonationFlow")
            .field("recipient", &FIXED_LIGHTNING_ADDRESS)
            .field("config", &self.config)
            .finish()
    }
}
