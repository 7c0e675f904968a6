//! Chat Session
//!
//! Submit/settle cycle of one chat view. A session owns its transcript and
//! allows at most one exchange with the gateway in flight:
//!
//! 1. [`ChatSession::submit`] appends the user message and hands back a
//!    [`PendingExchange`] carrying the request to send.
//! 2. The caller performs the request however it likes (browser fetch,
//!    reqwest, a test double).
//! 3. [`ChatSession::settle`] appends exactly one assistant message, the
//!    reply or a language-matched apology, and re-enables submitting.

use std::fmt::Display;
use thiserror::Error;

use super::language::fallback_apology;
use super::message::ChatMessage;
use super::transcript::Transcript;
use crate::gateway::dto::GatewayRequest;
use crate::mode::ChatMode;

/// Reasons a submit is ignored
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("message is empty")]
    EmptyInput,

    #[error("a reply is still being composed")]
    Busy,
}

/// An exchange that has been submitted but not yet settled
#[derive(Debug)]
#[must_use = "a pending exchange must be settled to re-enable the session"]
pub struct PendingExchange {
    request: GatewayRequest,
}

impl PendingExchange {
    /// Request to send to the gateway
    pub fn request(&self) -> &GatewayRequest {
        &self.request
    }

    /// The user's text exactly as submitted
    pub fn original_text(&self) -> &str {
        &self.request.message
    }
}

/// State of one chat view
#[derive(Debug, Clone)]
pub struct ChatSession {
    mode: ChatMode,
    transcript: Transcript,
    composing: bool,
}

impl ChatSession {
    /// New session seeded with the mode's greeting
    pub fn new(mode: ChatMode) -> Self {
        Self {
            mode,
            transcript: Transcript::seeded(mode),
            composing: false,
        }
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    /// True between a submit and its settlement
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn can_submit(&self) -> bool {
        !self.composing
    }

    /// Accept user input.
    ///
    /// The emptiness check trims, but the text stored and sent is the raw
    /// input.
    pub fn submit(&mut self, input: &str) -> Result<PendingExchange, SubmitRejected> {
        if input.trim().is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }
        if self.composing {
            return Err(SubmitRejected::Busy);
        }

        self.transcript.push_user(input);
        self.composing = true;

        tracing::debug!(mode = %self.mode, chars = input.chars().count(), "Submitted message");

        Ok(PendingExchange {
            request: GatewayRequest::new(input, self.mode),
        })
    }

    /// Record the outcome of an exchange.
    ///
    /// A reply is appended as returned; a failure is replaced with the
    /// apology matching the language of the user's text. Always leaves the
    /// composing state.
    pub fn settle<E: Display>(
        &mut self,
        exchange: PendingExchange,
        outcome: Result<String, E>,
    ) -> &ChatMessage {
        self.composing = false;

        let text = match outcome {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Gateway exchange failed");
                fallback_apology(exchange.original_text()).to_string()
            }
        };

        self.transcript.push_assistant(text)
    }
}
