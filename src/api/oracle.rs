use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failures of a single Oracle round-trip
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("oracle returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("oracle returned no text")]
    EmptyResponse,

    #[error("oracle did not answer within {0:?}")]
    Timeout(Duration),
}

/// Generative text/search capability answering natural-language prompts.
///
/// Implementations are asked for JSON output but nothing about the returned
/// text is trusted: callers validate it themselves.
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError>;
}
