//! Configuration management.
//!
//! All settings come from environment variables, optionally seeded from a
//! dotenv file:
//!
//! - `API_ID`: numeric application ID
//! - `API_HASH`: application secret
//! - `SESSION`: session token used to authenticate the client
//! - `SOURCE_ID`: comma or space separated chat IDs / `@handles` to watch
//! - `TARGET_ID`: comma or space separated chat IDs / `@handles` to forward to
//!
//! Process environment values win over values read from the file.

use crate::error::ConfigError;
use crate::messenger::ChatIdentifier;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::Path;

pub const API_ID_VAR: &str = "API_ID";
pub const API_HASH_VAR: &str = "API_HASH";
pub const SESSION_VAR: &str = "SESSION";
pub const SOURCE_VAR: &str = "SOURCE_ID";
pub const TARGET_VAR: &str = "TARGET_ID";

/// Application configuration, fixed for the lifetime of the process.
#[derive(Clone)]
pub struct Config {
    /// Numeric application ID
    pub api_id: i32,
    /// Application secret
    pub api_hash: String,
    /// Session token handed to the client
    pub session: String,
    /// Chats whose new messages are relayed
    pub sources: Vec<ChatIdentifier>,
    /// Chats every relayed message is forwarded to, in order
    pub targets: Vec<ChatIdentifier>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_id", &self.api_id)
            .field("api_hash", &"<redacted>")
            .field("session", &"<redacted>")
            .field("sources", &self.sources)
            .field("targets", &self.targets)
            .finish()
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// With `env_file` set, that file must exist and parse. Otherwise a `.env`
    /// in the working directory is used when present.
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => read_default_env_file()?,
        };

        Self::from_lookup(|name| env::var(name).ok().or_else(|| file_vars.get(name).cloned()))
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingEnvVar(name))
        };

        let api_id = require(API_ID_VAR)?;
        let api_hash = require(API_HASH_VAR)?;
        let session = require(SESSION_VAR)?;
        let raw_sources = require(SOURCE_VAR)?;
        let raw_targets = require(TARGET_VAR)?;

        let api_id = api_id
            .trim()
            .parse::<i32>()
            .map_err(|_| ConfigError::InvalidApiId(api_id.clone()))?;

        let sources = parse_list(&raw_sources);
        if sources.is_empty() {
            return Err(ConfigError::EmptyChatList(SOURCE_VAR));
        }

        let targets = parse_list(&raw_targets);
        if targets.is_empty() {
            return Err(ConfigError::EmptyChatList(TARGET_VAR));
        }

        Ok(Self {
            api_id,
            api_hash,
            session,
            sources,
            targets,
        })
    }

    /// Targets that also appear in the source list.
    ///
    /// Forwarding into a watched chat feeds the message back in.
    pub fn looping_targets(&self) -> Vec<&ChatIdentifier> {
        self.targets
            .iter()
            .filter(|target| self.sources.iter().any(|source| source.same_chat(target)))
            .collect()
    }

    /// Targets listed more than once, each reported once.
    pub fn duplicate_targets(&self) -> Vec<&ChatIdentifier> {
        let mut duplicates: Vec<&ChatIdentifier> = Vec::new();
        for (index, target) in self.targets.iter().enumerate() {
            let seen_before = self.targets[..index].iter().any(|t| t.same_chat(target));
            let reported = duplicates.iter().any(|d| d.same_chat(target));
            if seen_before && !reported {
                duplicates.push(target);
            }
        }
        duplicates
    }
}

/// Parse a comma or whitespace separated list of chat identifiers.
///
/// Order and duplicates are preserved. Tokens that are neither `@handles`
/// nor integers are logged and dropped.
pub fn parse_list(raw: &str) -> Vec<ChatIdentifier> {
    raw.replace(',', " ")
        .split_whitespace()
        .filter_map(|token| match token.parse::<ChatIdentifier>() {
            Ok(chat) => Some(chat),
            Err(_) => {
                tracing::warn!("Ignoring invalid id: {}", token);
                None
            }
        })
        .collect()
}

/// Read variables from an explicit dotenv file.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |source: dotenvy::Error| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(to_error)
}

/// Read `.env` from the working directory, if there is one.
fn read_default_env_file() -> Result<HashMap<String, String>, ConfigError> {
    match dotenvy::dotenv_iter() {
        Ok(iter) => Ok(iter.collect::<Result<HashMap<_, _>, _>>()?),
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(e.into()),
    }
}
