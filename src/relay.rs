//! Long-running relay: watches the source chats and hands every new message
//! to the forwarder.

use crate::config::Config;
use crate::forwarder::Forwarder;
use crate::messenger::telegram::TelegramMessenger;
use crate::messenger::{format_chat_list, ChatIdentifier, IncomingMessage};
use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::MessageKind;

/// Decides which incoming messages come from a watched chat.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    sources: Vec<ChatIdentifier>,
}

impl SourceFilter {
    pub fn new(sources: Vec<ChatIdentifier>) -> Self {
        Self { sources }
    }

    /// True when any configured source refers to the message's chat.
    ///
    /// Repeated sources still yield a single match per message.
    pub fn matches(&self, message: &IncomingMessage) -> bool {
        self.sources.iter().any(|source| source.matches(message))
    }
}

/// Forward `incoming` if it comes from a watched chat.
///
/// Returns whether the message was handed to the forwarder.
pub async fn handle_incoming(
    incoming: &IncomingMessage,
    sources: &SourceFilter,
    forwarder: &Forwarder,
) -> bool {
    if !sources.matches(incoming) {
        tracing::trace!(
            "Ignoring msg {} from chat {}",
            incoming.message_id,
            incoming.chat_id
        );
        return false;
    }

    forwarder.on_message(incoming).await;
    true
}

/// Ordinary posts only; joins, pins, title changes and other service
/// messages are never relayed.
fn is_relayable(msg: &Message) -> bool {
    matches!(msg.kind, MessageKind::Common(_))
}

async fn relay_message(
    msg: Message,
    sources: Arc<SourceFilter>,
    forwarder: Arc<Forwarder>,
) -> ResponseResult<()> {
    if !is_relayable(&msg) {
        tracing::trace!("Skipping service msg {} in chat {}", msg.id.0, msg.chat.id.0);
        return Ok(());
    }

    handle_incoming(&IncomingMessage::from(&msg), &sources, &forwarder).await;
    Ok(())
}

/// Log configuration oddities that are relayed as-is.
fn warn_suspicious_targets(config: &Config) {
    for target in config.looping_targets() {
        tracing::warn!(
            "Target {} is also a source; forwarded messages will be forwarded again",
            target
        );
    }
    for target in config.duplicate_targets() {
        tracing::warn!("Target {} is listed more than once", target);
    }
}

/// Main entry point for the relay.
///
/// Returns once the dispatcher stops after Ctrl-C.
pub async fn run(config: Config) -> Result<()> {
    warn_suspicious_targets(&config);

    let bot = Bot::new(&config.session);
    let me = bot
        .get_me()
        .await
        .context("Failed to connect with the configured session")?;

    let messenger = Arc::new(TelegramMessenger::new(bot.clone()));
    let forwarder = Arc::new(Forwarder::new(messenger, config.targets.clone()));
    let sources = Arc::new(SourceFilter::new(config.sources.clone()));

    tracing::info!(
        "Bot started as @{} (api_id {}). Sources: {} Targets: {}",
        me.user.username.as_deref().unwrap_or("unknown"),
        config.api_id,
        format_chat_list(&config.sources),
        format_chat_list(forwarder.targets())
    );

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(relay_message))
        .branch(Update::filter_channel_post().endpoint(relay_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![sources, forwarder])
        .default_handler(|upd| async move {
            tracing::trace!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("relay"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("Stopped by user");
    Ok(())
}
