//! Telegram messenger implementation.
//!
//! Implements the Messenger trait with the Bot API `forwardMessage` call,
//! which re-posts a message with its "Forwarded from" header intact.

use super::{ChatIdentifier, IncomingMessage, Messenger};
use crate::error::ForwardError;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{MessageId, Recipient};

/// Telegram messenger for forwarding.
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    /// Create a new Telegram messenger on top of an existing client.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn forward(
        &self,
        target: &ChatIdentifier,
        message: &IncomingMessage,
    ) -> Result<(), ForwardError> {
        self.bot
            .forward_message(
                to_recipient(target),
                ChatId(message.chat_id),
                MessageId(message.message_id),
            )
            .await?;
        Ok(())
    }

    fn platform_name(&self) -> &'static str {
        "Telegram"
    }
}

/// Map a configured identifier onto a Bot API recipient.
pub fn to_recipient(chat: &ChatIdentifier) -> Recipient {
    match chat {
        ChatIdentifier::Numeric(id) => Recipient::Id(ChatId(*id)),
        ChatIdentifier::Handle(handle) => Recipient::ChannelUsername(handle.clone()),
    }
}

impl From<&Message> for IncomingMessage {
    fn from(msg: &Message) -> Self {
        Self {
            chat_id: msg.chat.id.0,
            chat_username: msg.chat.username().map(str::to_string),
            message_id: msg.id.0,
        }
    }
}
