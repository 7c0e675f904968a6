//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod dashboard;
pub mod landing;

pub use chat::Chat;
pub use dashboard::Dashboard;
pub use landing::Landing;
