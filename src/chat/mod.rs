//! Chat Client Logic
//!
//! Everything the chat view does that is not rendering: the transcript,
//! the submit/settle cycle and the language-matched fallback reply.
//! Compiled without the `server` feature so the WASM frontend can use it.

pub mod language;
pub mod message;
pub mod session;
pub mod transcript;

pub use language::{contains_bangla, fallback_apology, Language};
pub use message::{format_time, ChatMessage, Sender};
pub use session::{ChatSession, PendingExchange, SubmitRejected};
pub use transcript::Transcript;
