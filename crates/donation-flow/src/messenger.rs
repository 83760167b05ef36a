//! Messaging capability used by the donation flow.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tracing::info;

use crate::chat::{ChatId, MessageHandle};
use crate::error::MessengerError;

/// Conversation state key under which an amount prompt resumes the donation.
pub const CREATE_DONATION_STATE: &str = "CreateDonationState";

/// A request for the user to type an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountPrompt {
    /// State key the reply is routed back under.
    pub state: &'static str,
    /// The command that triggered the prompt, replayed with the amount.
    pub command_text: String,
    /// Localized prompt shown to the user.
    pub text: String,
}

/// Trait for sending, editing and deleting chat messages.
///
/// Abstracted to support different transports (Telegram, tests, etc.)
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a text message and return a handle for later edits.
    async fn send(&self, chat: ChatId, text: &str) -> Result<MessageHandle, MessengerError>;

    /// Replace the text of a previously sent message.
    async fn edit(&self, message: &MessageHandle, text: &str) -> Result<(), MessengerError>;

    /// Delete a previously sent message.
    async fn delete(&self, message: &MessageHandle) -> Result<(), MessengerError>;

    /// Ask the user for an amount; their reply re-enters under `prompt.state`.
    async fn ask_for_amount(&self, chat: ChatId, prompt: &AmountPrompt) -> Result<(), MessengerError>;
}

/// A messenger that only logs, for dry runs.
#[derive(Debug, Default)]
pub struct LoggingMessenger {
    next_id: AtomicI64,
}

impl LoggingMessenger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Messenger for LoggingMessenger {
    async fn send(&self, chat: ChatId, text: &str) -> Result<MessageHandle, MessengerError> {
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        info!(%chat, message_id, "Send: {}", text);
        Ok(MessageHandle { chat, message_id })
    }

    async fn edit(&self, message: &MessageHandle, text: &str) -> Result<(), MessengerError> {
        info!(chat = %message.chat, message_id = message.message_id, "Edit: {}", text);
        Ok(())
    }

    async fn delete(&self, message: &MessageHandle) -> Result<(), MessengerError> {
        info!(chat = %message.chat, message_id = message.message_id, "Delete");
        Ok(())
    }

    async fn ask_for_amount(&self, chat: ChatId, prompt: &AmountPrompt) -> Result<(), MessengerError> {
        info!(%chat, state = prompt.state, command = %prompt.command_text, "Ask: {}", prompt.text);
        Ok(())
    }
}
