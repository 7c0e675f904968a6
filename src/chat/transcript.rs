//! Transcript
//!
//! Ordered, append-only list of messages for one chat view. There is no
//! way to edit or remove a message once pushed.

use chrono::Local;

use super::message::{ChatMessage, Sender};
use crate::mode::ChatMode;

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    /// Empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript holding only the mode's greeting
    pub fn seeded(mode: ChatMode) -> Self {
        let mut transcript = Self::new();
        transcript.push(Sender::Assistant, mode.profile().greeting);
        transcript
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Sender::User, text)
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Sender::Assistant, text)
    }

    fn push(&mut self, sender: Sender, text: impl Into<String>) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text: text.into(),
            sender,
            timestamp: Local::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
