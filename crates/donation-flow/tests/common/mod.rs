//! Recording substitutes for the flow's collaborators.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use donation_flow::{
    async_trait, AmountPrompt, Chat, ChatId, ChatUser, DonationCommand, DonationConfig,
    DonationFlow, MessageHandle, Messenger, MessengerError, Payment, PaymentParams,
    PaymentWallet, WalletError,
};
use lnurl_pay::{FetchedPayRequest, InvoiceSource, LnurlError, PayRequestClient, PayRequestConfig};
use url::Url;

/// One call made to the messenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send { chat: ChatId, text: String },
    Edit { message: MessageHandle, text: String },
    Delete { message: MessageHandle },
    Ask { chat: ChatId, prompt: AmountPrompt },
}

#[derive(Debug, Default)]
pub struct RecordingMessenger {
    calls: Mutex<Vec<Call>>,
    next_id: AtomicI64,
    fail_sends: bool,
    fail_prompts: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A messenger whose sends always fail.
    pub fn failing_sends() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    /// A messenger whose amount prompts always fail.
    pub fn failing_prompts() -> Self {
        Self {
            fail_prompts: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn edits(&self) -> Vec<(MessageHandle, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Edit { message, text } => Some((message, text)),
                _ => None,
            })
            .collect()
    }

    pub fn deletes(&self) -> Vec<MessageHandle> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Delete { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> Vec<(ChatId, AmountPrompt)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Ask { chat, prompt } => Some((chat, prompt)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, chat: ChatId, text: &str) -> Result<MessageHandle, MessengerError> {
        self.record(Call::Send {
            chat,
            text: text.to_string(),
        });
        if self.fail_sends {
            return Err(MessengerError::SendFailed("chat unavailable".to_string()));
        }
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(MessageHandle { chat, message_id })
    }

    async fn edit(&self, message: &MessageHandle, text: &str) -> Result<(), MessengerError> {
        self.record(Call::Edit {
            message: message.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn delete(&self, message: &MessageHandle) -> Result<(), MessengerError> {
        self.record(Call::Delete {
            message: message.clone(),
        });
        Ok(())
    }

    async fn ask_for_amount(&self, chat: ChatId, prompt: &AmountPrompt) -> Result<(), MessengerError> {
        self.record(Call::Ask {
            chat,
            prompt: prompt.clone(),
        });
        if self.fail_prompts {
            return Err(MessengerError::SendFailed("user blocked the bot".to_string()));
        }
        Ok(())
    }
}

/// A wallet that records invoices and answers with a fixed result.
#[derive(Debug)]
pub struct RecordingWallet {
    paid: Mutex<Vec<PaymentParams>>,
    reject_with: Option<String>,
}

impl RecordingWallet {
    pub fn paying() -> Arc<Self> {
        Arc::new(Self {
            paid: Mutex::new(Vec::new()),
            reject_with: None,
        })
    }

    pub fn rejecting(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            paid: Mutex::new(Vec::new()),
            reject_with: Some(reason.to_string()),
        })
    }

    pub fn payments(&self) -> Vec<PaymentParams> {
        self.paid.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentWallet for RecordingWallet {
    async fn pay(&self, params: PaymentParams) -> Result<Payment, WalletError> {
        self.paid.lock().unwrap().push(params);
        match &self.reject_with {
            Some(reason) => Err(WalletError::Rejected(reason.clone())),
            None => Ok(Payment {
                payment_hash: "f00d".to_string(),
            }),
        }
    }
}

/// How the fake pay endpoint answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(&'static str),
    ConnectionRefused,
}

/// One recorded invoice request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceCall {
    pub url: String,
    pub amount_msat: u64,
    pub comment: String,
}

#[derive(Debug)]
pub struct RecordingInvoiceSource {
    reply: Reply,
    calls: Mutex<Vec<InvoiceCall>>,
}

impl RecordingInvoiceSource {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<InvoiceCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InvoiceSource for RecordingInvoiceSource {
    async fn request_invoice(
        &self,
        url: &Url,
        amount_msat: u64,
        comment: &str,
    ) -> Result<FetchedPayRequest, LnurlError> {
        self.calls.lock().unwrap().push(InvoiceCall {
            url: url.to_string(),
            amount_msat,
            comment: comment.to_string(),
        });
        match &self.reply {
            Reply::Body(body) => Ok(FetchedPayRequest {
                parameters: serde_json::from_str(body)?,
                raw_body: body.to_string(),
            }),
            Reply::ConnectionRefused => {
                // Produce a genuine transport error by calling a closed local port.
                let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
                let addr = listener.local_addr().unwrap();
                drop(listener);
                let dead = Url::parse(&format!("http://{}{}", addr, url.path())).unwrap();
                PayRequestClient::new(PayRequestConfig::default())?
                    .fetch(&dead, amount_msat, comment)
                    .await
            }
        }
    }
}

/// Forwards requests to a local server, keeping path and query.
pub struct RedirectingSource {
    pub client: PayRequestClient,
    pub base: Url,
}

#[async_trait]
impl InvoiceSource for RedirectingSource {
    async fn request_invoice(
        &self,
        url: &Url,
        amount_msat: u64,
        comment: &str,
    ) -> Result<FetchedPayRequest, LnurlError> {
        let local = self.base.join(url.path()).unwrap();
        self.client.fetch(&local, amount_msat, comment).await
    }
}

pub fn bot() -> ChatUser {
    ChatUser::new(1000, Some("tipbot"), "Tip Bot")
}

pub fn alice() -> ChatUser {
    ChatUser::new(42, Some("alice"), "Alice")
}

pub fn flow(messenger: Arc<RecordingMessenger>, invoices: Arc<dyn InvoiceSource>) -> DonationFlow {
    DonationFlow::new(messenger, invoices, DonationConfig::new(bot()))
}

pub fn private_command(text: &str, wallet: Option<Arc<RecordingWallet>>) -> DonationCommand {
    command(Chat::private(42), text, wallet)
}

pub fn group_command(text: &str, wallet: Option<Arc<RecordingWallet>>) -> DonationCommand {
    command(Chat::group(-100123), text, wallet)
}

fn command(chat: Chat, text: &str, wallet: Option<Arc<RecordingWallet>>) -> DonationCommand {
    let command = DonationCommand::new(alice(), chat, text);
    match wallet {
        Some(wallet) => command.with_wallet(wallet),
        None => command,
    }
}
