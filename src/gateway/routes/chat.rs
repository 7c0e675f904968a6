//! Chat Routes
//!
//! - POST /functions/v1/chat - Forward one message to the model
//! - OPTIONS /functions/v1/chat - CORS preflight

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::gateway::dto::{GatewayRequest, GatewayResponse};
use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::state::AppState;
use crate::mode::ChatMode;
use crate::provider::build_request;

/// OPTIONS /functions/v1/chat
///
/// Answers preflight with an empty 200; CORS headers are added by the
/// router layers. Never consults the credential.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST /functions/v1/chat
///
/// Checks the credential, validates the body, then performs exactly one
/// provider call. The message is forwarded untouched and without history.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> GatewayResult<Json<GatewayResponse>> {
    // Credential first: a misconfigured gateway fails before touching the body
    let api_key = state
        .credentials
        .api_key()
        .ok_or_else(|| GatewayError::MissingCredential {
            var: state.credentials.describe(),
        })?;

    let request = parse_request(&body)?;
    let mode = request.mode.unwrap_or_default();

    tracing::info!(
        mode = %mode,
        provider = state.provider.name(),
        chars = request.message.chars().count(),
        "Forwarding message to provider"
    );

    let completion = build_request(&request.message, &state.settings);
    let response = state.provider.complete(&api_key, &completion).await?;

    Ok(Json(GatewayResponse { response }))
}

/// Body as received; `message` is optional here so a missing field gets the
/// same error as an empty one.
#[derive(Debug, Deserialize)]
struct RawChatRequest {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    mode: Option<ChatMode>,
}

fn parse_request(body: &[u8]) -> GatewayResult<GatewayRequest> {
    let raw: RawChatRequest = serde_json::from_slice(body)
        .map_err(|e| GatewayError::InvalidInput(format!("Invalid request body: {}", e)))?;

    match raw.message {
        Some(message) if !message.trim().is_empty() => Ok(GatewayRequest {
            message,
            mode: raw.mode,
        }),
        _ => Err(GatewayError::InvalidInput("Message is required".to_string())),
    }
}
