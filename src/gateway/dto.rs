//! Data Transfer Objects
//!
//! Request and response bodies of the chat endpoint.
//! Shared by the gateway, the web client and the CLI.

use serde::{Deserialize, Serialize};

use crate::mode::ChatMode;

// ============================================
// CHAT DTOs
// ============================================

/// Chat request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayRequest {
    /// The user's message, forwarded verbatim
    pub message: String,
    /// Active chat mode (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ChatMode>,
}

impl GatewayRequest {
    pub fn new(message: impl Into<String>, mode: ChatMode) -> Self {
        Self {
            message: message.into(),
            mode: Some(mode),
        }
    }
}

/// Chat success response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    /// Model output text
    pub response: String,
}

/// Chat failure response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayErrorBody {
    /// What went wrong
    pub error: String,
    /// Operator-facing hint
    pub details: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Whether the provider credential is currently set
    pub credential_configured: bool,
    /// Provider name
    pub provider: String,
    /// Seconds since startup
    pub uptime_seconds: u64,
    /// Gateway version
    pub version: String,
}
