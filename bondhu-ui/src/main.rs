//! BondhuBot Web Client
//!
//! Bilingual (English/Bangla) chat assistant built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page and dashboard with shortcuts into each chat mode
//! - Chat view with markdown-rendered replies
//! - Language-matched apology when the gateway fails
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Transcript logic lives in the `bondhu` library; this crate
//! renders it and talks to the gateway over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
