//! Shared types for messenger implementations.

use std::fmt;
use std::str::FromStr;

/// Prefix marking a chat handle (public username) rather than a numeric ID.
pub const HANDLE_MARKER: char = '@';

/// A chat reference as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatIdentifier {
    /// Numeric chat ID, e.g. `-1001234567890`.
    Numeric(i64),
    /// Handle kept verbatim, marker included, e.g. `@SourceChannel`.
    Handle(String),
}

impl ChatIdentifier {
    /// Handle without its marker, if this is a handle.
    pub fn username(&self) -> Option<&str> {
        match self {
            ChatIdentifier::Handle(handle) => Some(handle.trim_start_matches(HANDLE_MARKER)),
            ChatIdentifier::Numeric(_) => None,
        }
    }

    /// Whether two configured identifiers name the same chat.
    ///
    /// Handles compare like [`ChatIdentifier::matches`]; a handle never equals
    /// a numeric ID since resolving it needs the platform.
    pub fn same_chat(&self, other: &ChatIdentifier) -> bool {
        match (self, other) {
            (ChatIdentifier::Numeric(a), ChatIdentifier::Numeric(b)) => a == b,
            (ChatIdentifier::Handle(_), ChatIdentifier::Handle(_)) => {
                match (self.username(), other.username()) {
                    (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Whether this identifier refers to the chat a message came from.
    ///
    /// Handles compare case-insensitively since Telegram usernames do.
    pub fn matches(&self, message: &IncomingMessage) -> bool {
        match self {
            ChatIdentifier::Numeric(id) => *id == message.chat_id,
            ChatIdentifier::Handle(_) => match (self.username(), &message.chat_username) {
                (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
                _ => false,
            },
        }
    }
}

impl fmt::Display for ChatIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatIdentifier::Numeric(id) => write!(f, "{}", id),
            ChatIdentifier::Handle(handle) => f.write_str(handle),
        }
    }
}

/// Token that is neither a handle nor an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChatIdentifier(pub String);

impl fmt::Display for InvalidChatIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid chat identifier: {}", self.0)
    }
}

impl std::error::Error for InvalidChatIdentifier {}

impl FromStr for ChatIdentifier {
    type Err = InvalidChatIdentifier;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.starts_with(HANDLE_MARKER) {
            return Ok(ChatIdentifier::Handle(token.to_string()));
        }

        token
            .parse::<i64>()
            .map(ChatIdentifier::Numeric)
            .map_err(|_| InvalidChatIdentifier(token.to_string()))
    }
}

/// Platform-neutral view of a newly observed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Chat the message was posted in
    pub chat_id: i64,
    /// Public username of that chat, without marker
    pub chat_username: Option<String>,
    /// Message ID within the chat
    pub message_id: i32,
}

/// Render identifiers as `[a, b, c]` for log lines.
pub fn format_chat_list(chats: &[ChatIdentifier]) -> String {
    let items: Vec<String> = chats.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
