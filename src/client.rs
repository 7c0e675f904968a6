//! Gateway HTTP Client
//!
//! Talks to a running gateway over HTTP. Used by the CLI.
//! No timeout is applied: a request runs until it succeeds or fails.

use reqwest::Client;
use thiserror::Error;

use crate::gateway::dto::{GatewayErrorBody, GatewayRequest, GatewayResponse, HealthResponse};
use crate::gateway::CHAT_ENDPOINT;

/// Default gateway URL
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8787";

/// Client for the gateway's chat and health endpoints
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one message and return the model's reply
    pub async fn send(&self, request: &GatewayRequest) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, CHAT_ENDPOINT);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if status.is_success() {
            let body: GatewayResponse = response.json().await?;
            return Ok(body.response);
        }

        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<GatewayErrorBody>(&text) {
            Ok(body) => Err(ClientError::Gateway {
                status: status.as_u16(),
                error: body.error,
                details: body.details,
            }),
            Err(_) => Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            }),
        }
    }

    /// Fetch the gateway's full health status
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Errors returned by [`GatewayClient`]
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gateway error {status}: {error} ({details})")]
    Gateway {
        status: u16,
        error: String,
        details: String,
    },

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{build_router, AppState};
    use crate::mode::ChatMode;
    use crate::provider::{
        ChatProvider, CompletionRequest, CredentialSource, ProviderError, StaticCredential,
    };
    use async_trait::async_trait;
    use std::sync::Arc;

    struct UppercaseProvider;

    #[async_trait]
    impl ChatProvider for UppercaseProvider {
        fn name(&self) -> &str {
            "uppercase"
        }

        async fn complete(
            &self,
            _api_key: &str,
            request: &CompletionRequest,
        ) -> Result<String, ProviderError> {
            Ok(request.user.to_uppercase())
        }
    }

    async fn spawn_gateway(credential: StaticCredential) -> GatewayClient {
        let credentials: Arc<dyn CredentialSource> = Arc::new(credential);
        let router = build_router(AppState::new(Arc::new(UppercaseProvider), credentials));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        GatewayClient::new(format!("http://{}/", addr))
    }

    #[test]
    fn test_base_url_normalized() {
        let client = GatewayClient::new("http://localhost:8787/");
        assert_eq!(client.base_url(), DEFAULT_GATEWAY_URL);
    }

    #[tokio::test]
    async fn test_send_round_trip() {
        let client = spawn_gateway(StaticCredential::new("sk-test")).await;

        let reply = client
            .send(&GatewayRequest::new("good morning", ChatMode::Translate))
            .await
            .unwrap();
        assert_eq!(reply, "GOOD MORNING");
    }

    #[tokio::test]
    async fn test_send_surfaces_gateway_error() {
        let client = spawn_gateway(StaticCredential::missing()).await;

        let err = client
            .send(&GatewayRequest::new("hi", ChatMode::Default))
            .await
            .unwrap_err();
        match err {
            ClientError::Gateway { status, details, .. } => {
                assert_eq!(status, 500);
                assert!(!details.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_health() {
        let client = spawn_gateway(StaticCredential::missing()).await;

        let health = client.health().await.unwrap();
        assert_eq!(health.status, "degraded");
        assert!(!health.credential_configured);
        assert_eq!(health.provider, "uppercase");
    }
}
