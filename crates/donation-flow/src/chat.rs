//! Chat identities and message handles.

use std::fmt;

/// Identifier of a chat (private or group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of chat a command arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    /// One-to-one chat between the user and the bot.
    Private,
    Group,
}

/// A chat a command arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chat {
    pub id: ChatId,
    pub kind: ChatKind,
}

impl Chat {
    pub fn private(id: i64) -> Self {
        Self {
            id: ChatId(id),
            kind: ChatKind::Private,
        }
    }

    pub fn group(id: i64) -> Self {
        Self {
            id: ChatId(id),
            kind: ChatKind::Group,
        }
    }

    pub fn is_private(&self) -> bool {
        self.kind == ChatKind::Private
    }
}

/// A chat participant (a donor or the bot itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUser {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
}

impl ChatUser {
    pub fn new(id: i64, username: Option<&str>, first_name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.map(str::to_string),
            first_name: first_name.into(),
        }
    }

    /// The user's private chat with the bot.
    pub fn private_chat(&self) -> ChatId {
        ChatId(self.id)
    }
}

/// Renders as `@username`, else the first name, else the numeric id.
impl fmt::Display for ChatUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.username.as_deref() {
            Some(username) if !username.is_empty() => write!(f, "@{}", username),
            _ if !self.first_name.is_empty() => write!(f, "{}", self.first_name),
            _ => write!(f, "{}", self.id),
        }
    }
}

/// Handle to a message the bot sent, used to edit or delete it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHandle {
    pub chat: ChatId,
    pub message_id: i64,
}
