//! Gateway API
//!
//! HTTP access to the BondhuBot gateway.

pub mod client;

pub use client::{get_gateway_url, send_message};
