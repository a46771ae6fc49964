//! Completion service clients.
//!
//! The planner only sees the [`LlmClient`] trait; callers construct a concrete
//! client and hand it in, so tests can substitute [`FakeClient`].

pub mod fake;
pub mod openai;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::LlmConfig;

pub use fake::FakeClient;
pub use openai::OpenAiClient;

/// Errors from the completion service boundary
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Completion request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Completion client not configured: {0}")]
    NotConfigured(String),
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single prompt and return the generated text untouched
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier sent with each request
    fn model_name(&self) -> &str;
}

/// Build the client named by `config.provider`
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiClient::from_config(config)?)),
        "fake" => Ok(Arc::new(FakeClient::with_sample_menu())),
        other => Err(LlmError::NotConfigured(format!("Unknown provider: {}", other))),
    }
}
