//! Error types for the application.

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("API_ID must be an integer, got {0:?}")]
    InvalidApiId(String),

    #[error("No valid {0} found")]
    EmptyChatList(&'static str),

    #[error("Failed to read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Failed to read .env: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Errors raised by a single forward attempt.
#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Failure reported by a `Messenger` that does not talk to Telegram.
    #[error("Platform error: {0}")]
    Platform(String),
}
