use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key (the only credential)
    pub gemini_api_key: String,

    /// Gemini REST base URL
    pub gemini_api_url: String,

    /// Model answering the prompts
    pub gemini_model: String,

    /// Seconds before an Oracle call is abandoned
    pub oracle_timeout_secs: u64,

    /// Seconds between slideshow advances
    pub slide_interval_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            gemini_api_key: env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?,

            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),

            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),

            oracle_timeout_secs: env::var("ORACLE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .context("ORACLE_TIMEOUT_SECS must be a valid number")?,

            slide_interval_secs: env::var("SLIDE_INTERVAL_SECS")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .context("SLIDE_INTERVAL_SECS must be a valid number")?,
        })
    }

    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_secs(self.oracle_timeout_secs.max(1))
    }

    pub fn slide_interval(&self) -> Duration {
        Duration::from_secs(self.slide_interval_secs.max(1))
    }
}
