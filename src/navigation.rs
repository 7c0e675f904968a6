//! Client Routes
//!
//! Navigation targets of the web client. Views only ever navigate between
//! these three paths, optionally carrying a chat mode.

use crate::mode::ChatMode;

/// Path of the landing page
pub const LANDING_PATH: &str = "/";
/// Path of the dashboard
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Path of the chat view
pub const CHAT_PATH: &str = "/chat";

/// A navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Dashboard,
    Chat(ChatMode),
}

impl AppRoute {
    /// Href for this route, including the `mode` query parameter for chat
    pub fn path(&self) -> String {
        match self {
            AppRoute::Landing => LANDING_PATH.to_string(),
            AppRoute::Dashboard => DASHBOARD_PATH.to_string(),
            AppRoute::Chat(mode) => match mode.query_value() {
                Some(value) => format!("{}?mode={}", CHAT_PATH, value),
                None => CHAT_PATH.to_string(),
            },
        }
    }
}

/// A dashboard shortcut into the chat view
#[derive(Debug, Clone, Copy)]
pub struct DashboardFeature {
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind gradient stops for the card accent
    pub accent: &'static str,
    pub mode: ChatMode,
}

impl DashboardFeature {
    pub fn route(&self) -> AppRoute {
        AppRoute::Chat(self.mode)
    }
}

/// The four dashboard shortcuts, one per chat mode
pub const DASHBOARD_FEATURES: [DashboardFeature; 4] = [
    DashboardFeature {
        title: "Chat",
        description: "Start a conversation with BondhuBot",
        accent: "from-blue-500 to-purple-600",
        mode: ChatMode::Default,
    },
    DashboardFeature {
        title: "Translation",
        description: "Translate between English and Bangla",
        accent: "from-green-500 to-emerald-600",
        mode: ChatMode::Translate,
    },
    DashboardFeature {
        title: "Writing Assistant",
        description: "Get help with writing and editing",
        accent: "from-orange-500 to-red-600",
        mode: ChatMode::Write,
    },
    DashboardFeature {
        title: "Code Helper",
        description: "Get programming assistance",
        accent: "from-indigo-500 to-blue-600",
        mode: ChatMode::Code,
    },
];
