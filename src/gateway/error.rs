//! Gateway Error Types
//!
//! Defines error types for the gateway and implements conversion to HTTP
//! responses with a `{error, details}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::gateway::dto::GatewayErrorBody;
use crate::provider::ProviderError;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Provider API key is not set
    #[error("{var} is not set in environment variables")]
    MissingCredential { var: String },

    /// Request body is unusable
    #[error("{0}")]
    InvalidInput(String),

    /// The model call failed
    #[error("Model provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    /// HTTP status and stable error code
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::MissingCredential { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "MISSING_CREDENTIAL")
            }
            GatewayError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            GatewayError::Provider(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PROVIDER_ERROR"),
            GatewayError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            GatewayError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }

    /// Operator-facing hint returned in `details`
    pub fn details(&self) -> String {
        match self {
            GatewayError::MissingCredential { var } => format!(
                "If this persists, please ensure {} is properly set in the gateway environment",
                var
            ),
            GatewayError::InvalidInput(_) => {
                "Send a JSON body with a non-empty \"message\" string".to_string()
            }
            GatewayError::Provider(_) => {
                "The model provider could not complete the request; check the API key and try again"
                    .to_string()
            }
            GatewayError::Internal(_) | GatewayError::Io(_) => {
                "Unexpected gateway failure; see server logs".to_string()
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        let request_id = uuid::Uuid::new_v4().to_string();

        // Log the error
        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Gateway error occurred"
        );

        let body = GatewayErrorBody {
            error: self.to_string(),
            details: self.details(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
