// src/config.rs
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PREFIX: &str = "%";
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1000;
pub const DEFAULT_CHUNK_DELAY_MS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bind_addr: String,
    /// Leading marker that makes a chat message a bot command.
    pub prefix: String,
    /// Longest text the chat API accepts per message, in characters.
    pub max_message_length: usize,
    /// Pause between consecutive chunks of one split-up message.
    pub chunk_delay: Duration,
    pub bot_name: String,
    pub bot_token: String,
    pub groupme_api_base: String,
    pub hub_api_base: String,
    pub factory_api_base: String,
}

impl BotConfig {
    /// Build the config from environment variables, falling back to defaults.
    /// Call `dotenvy::dotenv()` first if a .env file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000"),
            prefix: env_or("COMMAND_PREFIX", DEFAULT_PREFIX),
            max_message_length: parsed_env("MAX_MESSAGE_LENGTH", DEFAULT_MAX_MESSAGE_LENGTH)?,
            chunk_delay: Duration::from_millis(parsed_env(
                "CHUNK_DELAY_MS",
                DEFAULT_CHUNK_DELAY_MS,
            )?),
            bot_name: env_or("BOT_NAME", "memebot"),
            // Empty token is allowed so `local` mode works without chat credentials.
            bot_token: env_or("BOT_TOKEN", ""),
            groupme_api_base: env_or("GROUPME_API_URL", "https://api.groupme.com/v3"),
            hub_api_base: env_or("MEBOTS_API_URL", "https://mebots.io/api"),
            factory_api_base: env_or("FACTORY_URL", "http://localhost:5000"),
        })
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            chunk_delay: Duration::from_millis(DEFAULT_CHUNK_DELAY_MS),
            bot_name: "memebot".to_string(),
            bot_token: String::new(),
            groupme_api_base: "https://api.groupme.com/v3".to_string(),
            hub_api_base: "https://mebots.io/api".to_string(),
            factory_api_base: "http://localhost:5000".to_string(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
