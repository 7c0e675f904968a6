//! Application State
//!
//! Shared state accessible by all gateway handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::provider::{ChatProvider, CompletionSettings, CredentialSource};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion provider
    pub provider: Arc<dyn ChatProvider>,
    /// Where the provider API key is read from on each request
    pub credentials: Arc<dyn CredentialSource>,
    /// Sampling settings for every completion
    pub settings: CompletionSettings,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with default completion settings
    pub fn new(provider: Arc<dyn ChatProvider>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self::with_settings(provider, credentials, CompletionSettings::default())
    }

    /// Create AppState with explicit completion settings
    pub fn with_settings(
        provider: Arc<dyn ChatProvider>,
        credentials: Arc<dyn CredentialSource>,
        settings: CompletionSettings,
    ) -> Self {
        Self {
            provider,
            credentials,
            settings,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
