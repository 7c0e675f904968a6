//! UI Components
//!
//! Reusable Leptos components for the BondhuBot pages.

pub mod feature_card;
pub mod message_bubble;
pub mod nav;
pub mod thinking;

pub use feature_card::FeatureCard;
pub use message_bubble::MessageBubble;
pub use nav::DashboardNav;
pub use thinking::Thinking;
