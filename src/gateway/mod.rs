//! BondhuBot Model Gateway
//!
//! Stateless HTTP bridge between the web client and the hosted model,
//! built with Axum.
//!
//! # Endpoints
//!
//! ## Chat
//! - `POST /functions/v1/chat` - Forward one message, return the model's text
//! - `OPTIONS /functions/v1/chat` - CORS preflight
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Every response carries a wildcard `Access-Control-Allow-Origin` and the
//! request-header allow-list the browser client needs.
//!
//! # Example
//!
//! ```rust,ignore
//! use bondhu::config::{ProviderConfig, ServerConfig};
//! use bondhu::gateway::{serve, AppState};
//! use bondhu::provider::{EnvCredential, OpenAiProvider};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(OpenAiProvider::new(&ProviderConfig::default())?);
//!     let credentials = Arc::new(EnvCredential::new("OPENAI_API_KEY"));
//!
//!     let state = AppState::new(provider, credentials);
//!     serve(state, &ServerConfig::default()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;

/// Path of the chat endpoint
pub const CHAT_ENDPOINT: &str = "/functions/v1/chat";

#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub use server::*;

#[cfg(feature = "server")]
mod server {
    pub use super::error::{GatewayError, GatewayResult};
    pub use super::state::AppState;

    use axum::{
        http::{
            header::{ACCESS_CONTROL_ALLOW_HEADERS, AUTHORIZATION, CONTENT_TYPE},
            HeaderName, HeaderValue, Method,
        },
        routing::{get, post},
        Router,
    };
    use std::sync::Arc;
    use tower_http::{
        cors::{Any, CorsLayer},
        set_header::SetResponseHeaderLayer,
        trace::TraceLayer,
    };

    use super::{routes, CHAT_ENDPOINT};
    use crate::config::ServerConfig;

    /// Request headers the browser client may send
    pub const ALLOWED_REQUEST_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

    /// Build the gateway router with all routes and middleware
    pub fn build_router(state: AppState) -> Router {
        let health_routes = Router::new()
            .route("/live", get(routes::health::liveness))
            .route("/ready", get(routes::health::readiness))
            .route("/", get(routes::health::full_health));

        // Create shared state
        let shared_state = Arc::new(state);

        Router::new()
            .route(
                CHAT_ENDPOINT,
                post(routes::chat::chat).options(routes::chat::preflight),
            )
            .nest("/health", health_routes)
            .layer(cors_layer())
            // Browser preflights are answered by the CORS layer; this puts
            // the same allow-list on every other response
            .layer(SetResponseHeaderLayer::if_not_present(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOWED_REQUEST_HEADERS),
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(shared_state)
    }

    fn cors_layer() -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([
                AUTHORIZATION,
                HeaderName::from_static("x-client-info"),
                HeaderName::from_static("apikey"),
                CONTENT_TYPE,
            ])
    }

    /// Start the gateway server
    pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), GatewayError> {
        let router = build_router(state);

        let addr = config.addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("BondhuBot gateway listening on {}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| GatewayError::Internal(format!("Server error: {}", e)))?;

        tracing::info!("BondhuBot gateway shut down gracefully");
        Ok(())
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(e) => {
                    tracing::error!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        tracing::info!("Shutdown signal received, starting graceful shutdown");
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::provider::{
            ChatProvider, CompletionRequest, ProviderError, StaticCredential, SYSTEM_PROMPT,
        };
        use async_trait::async_trait;
        use axum::{
            body::Body,
            http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, Request, Response, StatusCode},
        };
        use serde_json::Value;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Mutex;
        use tower::util::ServiceExt;

        /// Provider double that records calls instead of touching the network
        struct StubProvider {
            calls: AtomicUsize,
            last: Mutex<Option<(String, CompletionRequest)>>,
            fail: bool,
        }

        impl StubProvider {
            fn replying() -> Arc<Self> {
                Arc::new(Self {
                    calls: AtomicUsize::new(0),
                    last: Mutex::new(None),
                    fail: false,
                })
            }

            fn failing() -> Arc<Self> {
                Arc::new(Self {
                    calls: AtomicUsize::new(0),
                    last: Mutex::new(None),
                    fail: true,
                })
            }

            fn calls(&self) -> usize {
                self.calls.load(Ordering::SeqCst)
            }
        }

        #[async_trait]
        impl ChatProvider for StubProvider {
            fn name(&self) -> &str {
                "stub"
            }

            async fn complete(
                &self,
                api_key: &str,
                request: &CompletionRequest,
            ) -> Result<String, ProviderError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                *self.last.lock().unwrap() = Some((api_key.to_string(), request.clone()));
                if self.fail {
                    Err(ProviderError::Unavailable)
                } else {
                    Ok(format!("echo: {}", request.user))
                }
            }
        }

        fn create_test_app(provider: Arc<StubProvider>, credential: StaticCredential) -> Router {
            let state = AppState::new(provider, Arc::new(credential));
            build_router(state)
        }

        fn post_chat(body: &str) -> Request<Body> {
            Request::builder()
                .method("POST")
                .uri(CHAT_ENDPOINT)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        }

        async fn body_json(response: Response<Body>) -> Value {
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            serde_json::from_slice(&bytes).unwrap()
        }

        fn assert_cors_headers(response: &Response<Body>) {
            let headers = response.headers();
            assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
            let allowed = headers
                .get(ACCESS_CONTROL_ALLOW_HEADERS)
                .unwrap()
                .to_str()
                .unwrap()
                .to_ascii_lowercase();
            for name in ["authorization", "x-client-info", "apikey", "content-type"] {
                assert!(allowed.contains(name), "missing {} in {:?}", name, allowed);
            }
        }

        #[tokio::test]
        async fn test_chat_success() {
            let provider = StubProvider::replying();
            let app = create_test_app(Arc::clone(&provider), StaticCredential::new("sk-test"));

            let response = app.oneshot(post_chat(r#"{"message": "hi"}"#)).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_cors_headers(&response);

            let json = body_json(response).await;
            assert_eq!(json["response"], "echo: hi");
            assert_eq!(provider.calls(), 1);

            let (key, request) = provider.last.lock().unwrap().clone().unwrap();
            assert_eq!(key, "sk-test");
            assert_eq!(request.system, SYSTEM_PROMPT);
            assert_eq!(request.user, "hi");
            assert_eq!(request.max_tokens, 500);
        }

        #[tokio::test]
        async fn test_missing_credential_makes_no_outbound_call() {
            let provider = StubProvider::replying();
            let app = create_test_app(Arc::clone(&provider), StaticCredential::missing());

            let response = app.oneshot(post_chat(r#"{"message": "hi"}"#)).await.unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_cors_headers(&response);

            let json = body_json(response).await;
            assert!(json["error"].is_string());
            assert!(json["details"].is_string());
            assert_eq!(provider.calls(), 0);
        }

        #[tokio::test]
        async fn test_credential_checked_before_body() {
            let provider = StubProvider::replying();
            let app = create_test_app(Arc::clone(&provider), StaticCredential::missing());

            let response = app.oneshot(post_chat("not json")).await.unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let json = body_json(response).await;
            assert_eq!(json["error"], "static credential is not set in environment variables");
        }

        #[tokio::test]
        async fn test_preflight_ignores_credential_state() {
            for credential in [StaticCredential::missing(), StaticCredential::new("sk-test")] {
                let provider = StubProvider::replying();
                let app = create_test_app(Arc::clone(&provider), credential);

                let response = app
                    .oneshot(
                        Request::builder()
                            .method("OPTIONS")
                            .uri(CHAT_ENDPOINT)
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap();

                assert_eq!(response.status(), StatusCode::OK);
                assert_cors_headers(&response);

                let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap();
                assert!(bytes.is_empty());
                assert_eq!(provider.calls(), 0);
            }
        }

        #[tokio::test]
        async fn test_browser_preflight() {
            let app = create_test_app(StubProvider::replying(), StaticCredential::missing());

            let response = app
                .oneshot(
                    Request::builder()
                        .method("OPTIONS")
                        .uri(CHAT_ENDPOINT)
                        .header("Origin", "http://localhost:8080")
                        .header("Access-Control-Request-Method", "POST")
                        .header("Access-Control-Request-Headers", "apikey, content-type")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_cors_headers(&response);
        }

        #[tokio::test]
        async fn test_empty_message_is_rejected() {
            let provider = StubProvider::replying();
            let app = create_test_app(Arc::clone(&provider), StaticCredential::new("sk-test"));

            let response = app.oneshot(post_chat(r#"{"message": ""}"#)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let json = body_json(response).await;
            assert_eq!(json["error"], "Message is required");
            assert!(json["details"].is_string());
            assert_eq!(provider.calls(), 0);
        }

        #[tokio::test]
        async fn test_provider_failure_is_wrapped() {
            let provider = StubProvider::failing();
            let app = create_test_app(Arc::clone(&provider), StaticCredential::new("sk-test"));

            let response = app.oneshot(post_chat(r#"{"message": "hi"}"#)).await.unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let json = body_json(response).await;
            assert!(json["error"]
                .as_str()
                .unwrap()
                .starts_with("Model provider error:"));
            assert_eq!(provider.calls(), 1);
        }

        #[tokio::test]
        async fn test_repeated_requests_are_not_deduplicated() {
            let provider = StubProvider::replying();
            let app = create_test_app(Arc::clone(&provider), StaticCredential::new("sk-test"));

            for _ in 0..2 {
                let response = app
                    .clone()
                    .oneshot(post_chat(r#"{"message": "same"}"#))
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);
            }
            assert_eq!(provider.calls(), 2);
        }

        #[tokio::test]
        async fn test_mode_does_not_change_prompt() {
            let provider = StubProvider::replying();
            let app = create_test_app(Arc::clone(&provider), StaticCredential::new("sk-test"));

            let mut prompts = Vec::new();
            for mode in ["translate", "code", "nonsense"] {
                let body = format!(r#"{{"message": "Translate: good morning", "mode": "{}"}}"#, mode);
                let response = app.clone().oneshot(post_chat(&body)).await.unwrap();
                assert_eq!(response.status(), StatusCode::OK);

                let (_, request) = provider.last.lock().unwrap().clone().unwrap();
                assert_eq!(request.user, "Translate: good morning");
                prompts.push(request.system);
            }
            assert!(prompts.iter().all(|p| p == SYSTEM_PROMPT));
        }

        #[tokio::test]
        async fn test_health_live() {
            let app = create_test_app(StubProvider::replying(), StaticCredential::missing());

            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/health/live")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
        }

        #[tokio::test]
        async fn test_health_ready_tracks_credential() {
            for (credential, expected) in [
                (StaticCredential::missing(), StatusCode::SERVICE_UNAVAILABLE),
                (StaticCredential::new("sk-test"), StatusCode::OK),
            ] {
                let app = create_test_app(StubProvider::replying(), credential);

                let response = app
                    .oneshot(
                        Request::builder()
                            .uri("/health/ready")
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap();

                assert_eq!(response.status(), expected);
            }
        }

        #[tokio::test]
        async fn test_health_full() {
            let app = create_test_app(StubProvider::replying(), StaticCredential::new("sk-test"));

            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/health")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["status"], "healthy");
            assert_eq!(json["credential_configured"], true);
            assert_eq!(json["provider"], "stub");
        }
    }
}
