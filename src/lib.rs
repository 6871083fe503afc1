//! Telegram auto-forwarder library.
//!
//! Watches a set of source chats and forwards every new message to a set of
//! target chats, keeping the original-author attribution.

pub mod cli;
pub mod config;
pub mod error;
pub mod forwarder;
pub mod messenger;
pub mod relay;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{parse_list, Config};
pub use forwarder::Forwarder;
pub use messenger::{ChatIdentifier, IncomingMessage, Messenger};
pub use relay::SourceFilter;
