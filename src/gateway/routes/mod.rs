//! Gateway Routes
//!
//! Route handlers organized by functionality.

pub mod chat;
pub mod health;
