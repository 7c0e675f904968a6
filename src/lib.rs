//! # BondhuBot
//!
//! A bilingual (English/Bangla) AI chat assistant: a web client and a thin
//! gateway that forwards each message to a hosted chat-completion model.
//!
//! ## Features
//!
//! - **Shared contract**: chat modes, request/response bodies and routes are
//!   typed once and used by the gateway, the web client and the CLI
//! - **Transcript logic**: append-only transcript with one exchange in
//!   flight at a time and language-matched fallback replies
//! - **Stateless gateway**: one provider call per request, no history, no
//!   retries, permissive CORS
//!
//! ## Modules
//!
//! - [`mode`]: Chat modes and their display profiles
//! - [`navigation`]: Client routes and dashboard shortcuts
//! - [`chat`]: Transcript, session and fallback language logic
//! - [`markdown`]: Message rendering
//! - [`gateway`]: Request/response bodies and (with `server`) the Axum service
//! - [`provider`]: Chat-completion provider client (`server`)
//! - [`client`]: HTTP client for a running gateway (`server`)
//!
//! ## Quick Start
//!
//! ```rust
//! use bondhu::chat::ChatSession;
//! use bondhu::mode::ChatMode;
//!
//! let mut session = ChatSession::new(ChatMode::from_query(Some("translate")));
//!
//! let exchange = session.submit("Translate: good morning").unwrap();
//! assert_eq!(exchange.request().message, "Translate: good morning");
//!
//! // ... send exchange.request() to the gateway ...
//! session.settle(exchange, Ok::<_, String>("সুপ্রভাত".to_string()));
//!
//! assert_eq!(session.messages().len(), 3);
//! ```

pub mod chat;
pub mod gateway;
pub mod markdown;
pub mod mode;
pub mod navigation;

#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod provider;

// Re-export top-level types for convenience
pub use chat::{ChatMessage, ChatSession, PendingExchange, Sender, SubmitRejected, Transcript};

pub use gateway::dto::{GatewayErrorBody, GatewayRequest, GatewayResponse, HealthResponse};

pub use markdown::render_markdown;

pub use mode::{ChatMode, ChatModeProfile};

pub use navigation::{AppRoute, DashboardFeature, DASHBOARD_FEATURES};

#[cfg(feature = "server")]
pub use gateway::{build_router, serve, AppState, GatewayError};

#[cfg(feature = "server")]
pub use provider::{
    ChatProvider, CompletionRequest, CredentialSource, EnvCredential, OpenAiProvider,
    ProviderError, StaticCredential,
};

#[cfg(feature = "server")]
pub use client::{ClientError, GatewayClient};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ProviderConfig, ServerConfig};
