//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Forward new messages from source chats to target chats.
///
/// Credentials and chat lists are read from API_ID, API_HASH, SESSION,
/// SOURCE_ID and TARGET_ID.
#[derive(Parser, Debug)]
#[command(name = "telegram-autoforward")]
#[command(about = "Forward new Telegram messages from source chats to target chats")]
#[command(version)]
pub struct Cli {
    /// Read environment variables from this dotenv file instead of ./.env
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Validate configuration, print the parsed chats and exit without connecting
    #[arg(long)]
    pub check: bool,
}
