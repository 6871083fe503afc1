//! Messenger abstraction layer.
//!
//! Provides a trait-based abstraction over the messaging platform so the
//! forwarder can be driven by Telegram in production and by a mock in tests.

mod types;

pub mod telegram;

pub use types::{
    format_chat_list, ChatIdentifier, IncomingMessage, InvalidChatIdentifier, HANDLE_MARKER,
};

use crate::error::ForwardError;
use async_trait::async_trait;

/// Abstraction over messaging platforms for message forwarding.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Forward `message` into `target`, keeping the original-author attribution.
    async fn forward(
        &self,
        target: &ChatIdentifier,
        message: &IncomingMessage,
    ) -> Result<(), ForwardError>;

    /// Get the platform name for logging purposes.
    fn platform_name(&self) -> &'static str;
}
