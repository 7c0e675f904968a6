//! Model Provider
//!
//! Outbound side of the gateway: one chat-completion call per request.
//!
//! ## Architecture
//!
//! - **ChatProvider**: trait implemented by provider clients
//! - **OpenAiProvider**: OpenAI-compatible REST client
//! - **CredentialSource**: where the API key comes from, consulted per call
//! - **prompt**: fixed system instruction and request construction

mod credentials;
mod openai;
pub mod prompt;

pub use credentials::{CredentialSource, EnvCredential, StaticCredential};
pub use openai::OpenAiProvider;
pub use prompt::{build_request, CompletionSettings, SYSTEM_PROMPT};

use async_trait::async_trait;
use thiserror::Error;

/// A single-turn chat-completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction
    pub system: String,
    /// The only user turn
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A hosted chat-completion model
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Short provider name for logs and health output
    fn name(&self) -> &str;

    /// Perform one completion and return the model's text
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<String, ProviderError>;
}

/// Errors that can occur when calling the provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("authentication rejected: {0}")]
    Unauthorized(String),

    #[error("rate limited")]
    RateLimited,

    #[error("request timed out")]
    Timeout,

    #[error("provider unavailable")]
    Unavailable,

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("completion contained no text")]
    EmptyCompletion,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}
