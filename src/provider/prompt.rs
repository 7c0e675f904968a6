//! Prompt Construction
//!
//! Every call carries the same system instruction and only the newest user
//! message. No earlier turns are sent.

use super::CompletionRequest;
use crate::config::ProviderConfig;

/// Fixed persona for all chat modes
pub const SYSTEM_PROMPT: &str = "You are BondhuBot, a helpful and friendly bilingual assistant \
that can communicate in both English and Bangla.
If the user writes in English, respond in English.
If the user writes in Bangla, respond in Bangla.
If they mix languages, you should also mix languages in your response.
Keep your responses clear, helpful, and friendly.
You can help with writing, translation, explanations, coding, and general questions.";

/// Sampling settings applied to every call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

impl From<&ProviderConfig> for CompletionSettings {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Build the single-turn request for `message`
pub fn build_request(message: &str, settings: &CompletionSettings) -> CompletionRequest {
    CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        user: message.to_string(),
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
    }
}
