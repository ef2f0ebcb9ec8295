use std::env;

use crate::{errors::Error, Result};

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// Typed configuration for the news bot.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub news_api_key: String,
    pub news_api_url: String,
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    ///
    /// Values already set in the environment win over `.env` entries.
    pub fn load() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(Error::Config(format!("failed to read .env: {e}")));
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = required(&lookup, "TELEGRAM_BOT_TOKEN")?;
        let news_api_key = required(&lookup, "NEWS_API_KEY")?;
        let news_api_url = lookup("NEWS_API_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_NEWS_API_URL.to_string());

        Ok(Self {
            telegram_bot_token,
            news_api_key,
            news_api_url,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
