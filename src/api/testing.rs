//! Scripted Oracle fakes shared by the test modules.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::oracle::{Oracle, OracleError};

/// Answers each prompt with the first scripted response whose needle it contains
pub struct ScriptedOracle {
    responses: Vec<(&'static str, String)>,
    fail: bool,
    delay: Option<Duration>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            fail: false,
            delay: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn respond(mut self, needle: &'static str, body: &str) -> Self {
        self.responses.push((needle, body.to_string()));
        self
    }

    /// Every call fails as a transport-level error would
    pub fn fail_all(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Shared log of the prompts received so far
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(OracleError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: "unavailable".to_string(),
            });
        }

        self.responses
            .iter()
            .find(|(needle, _)| prompt.contains(needle))
            .map(|(_, body)| body.clone())
            .ok_or(OracleError::EmptyResponse)
    }
}
