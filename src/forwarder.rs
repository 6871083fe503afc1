//! Fan-out of each relayed message to every target chat.

use crate::messenger::{ChatIdentifier, IncomingMessage, Messenger};
use std::sync::Arc;

/// Forwards messages to a fixed, ordered list of targets.
pub struct Forwarder {
    messenger: Arc<dyn Messenger>,
    targets: Vec<ChatIdentifier>,
}

impl Forwarder {
    /// Create a forwarder over the given messenger and targets.
    pub fn new(messenger: Arc<dyn Messenger>, targets: Vec<ChatIdentifier>) -> Self {
        Self { messenger, targets }
    }

    pub fn targets(&self) -> &[ChatIdentifier] {
        &self.targets
    }

    /// Forward `message` to each target in order.
    ///
    /// Targets are tried one at a time. A failed target is logged and skipped;
    /// it never stops the remaining targets.
    pub async fn on_message(&self, message: &IncomingMessage) {
        for target in &self.targets {
            match self.messenger.forward(target, message).await {
                Ok(()) => {
                    tracing::info!("Forwarded msg {} -> {}", message.message_id, target);
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to forward msg {} to {} via {}: {}",
                        message.message_id,
                        target,
                        self.messenger.platform_name(),
                        e
                    );
                }
            }
        }
    }
}
