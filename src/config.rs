use std::env;

use anyhow::{anyhow, Result};

pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Startup configuration sourced from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
}

impl Config {
    /// Reads the three required values, failing if any is absent or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            practicum_token: require("PRACTICUM_TOKEN")?,
            telegram_token: require("TELEGRAM_TOKEN")?,
            telegram_chat_id: require("TELEGRAM_CHAT_ID")?,
            endpoint: env::var("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow!("{} must be set in the environment", name)),
    }
}
