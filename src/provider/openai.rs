//! OpenAI-compatible REST client
//!
//! HTTP client for the `/chat/completions` endpoint. One request per call;
//! failures are reported, never retried.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::{ChatProvider, CompletionRequest, ProviderError};
use crate::config::ProviderConfig;

/// Chat-completion client for OpenAI and API-compatible services
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a new provider client with the given configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn request_body<'a>(&'a self, request: &'a CompletionRequest) -> ChatCompletionBody<'a> {
        ChatCompletionBody {
            model: &self.model,
            messages: [
                WireMessage {
                    role: "system",
                    content: &request.system,
                },
                WireMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else if e.is_connect() {
                    ProviderError::Unavailable
                } else {
                    ProviderError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ProviderError::Unauthorized(text)
                }
                StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
                _ => ProviderError::Api {
                    status: status.as_u16(),
                    message: text,
                },
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        tracing::debug!(
            model = %self.model,
            choices = completion.choices.len(),
            "Received completion"
        );

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ProviderError::EmptyCompletion)
    }
}

// ============================================
// Wire DTOs
// ============================================

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::prompt::{build_request, CompletionSettings, SYSTEM_PROMPT};
    use axum::{http::HeaderMap, http::StatusCode as AxumStatus, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn provider_for(base_url: String) -> OpenAiProvider {
        OpenAiProvider::new(&ProviderConfig {
            base_url,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = provider_for("http://localhost:9999/v1/".to_string());
        assert_eq!(provider.endpoint(), "http://localhost:9999/v1/chat/completions");
        assert_eq!(provider.model(), "gpt-4");
    }

    #[tokio::test]
    async fn test_complete_sends_single_turn_request() {
        let captured: Arc<Mutex<Option<(String, Value)>>> = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&captured);

        let router = Router::new().route(
            "/chat/completions",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let sink = Arc::clone(&sink);
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    *sink.lock().unwrap() = Some((auth, body));
                    Json(json!({
                        "choices": [{"message": {"role": "assistant", "content": "Hello there!"}}]
                    }))
                }
            }),
        );
        let provider = provider_for(spawn_stub(router).await);

        let request = build_request("hi", &CompletionSettings::default());
        let text = provider.complete("sk-test", &request).await.unwrap();
        assert_eq!(text, "Hello there!");

        let (auth, body) = captured.lock().unwrap().take().unwrap();
        assert_eq!(auth, "Bearer sk-test");
        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["max_tokens"], 500);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], SYSTEM_PROMPT);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "hi");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { (AxumStatus::UNAUTHORIZED, "invalid api key") }),
        );
        let provider = provider_for(spawn_stub(router).await);

        let request = build_request("hi", &CompletionSettings::default());
        let err = provider.complete("bad", &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::Unauthorized(ref m) if m == "invalid api key"));
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { AxumStatus::TOO_MANY_REQUESTS }),
        );
        let provider = provider_for(spawn_stub(router).await);

        let request = build_request("hi", &CompletionSettings::default());
        let err = provider.complete("k", &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::RateLimited));
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_completion() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({"choices": []})) }),
        );
        let provider = provider_for(spawn_stub(router).await);

        let request = build_request("hi", &CompletionSettings::default());
        let err = provider.complete("k", &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let router = Router::new().route("/chat/completions", post(|| async { "not json" }));
        let provider = provider_for(spawn_stub(router).await);

        let request = build_request("hi", &CompletionSettings::default());
        let err = provider.complete("k", &request).await.unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }
}
