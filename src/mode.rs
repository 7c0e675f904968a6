//! Chat Modes
//!
//! The closed set of chat presets shared by the navigation layer, the chat
//! view and the gateway request contract. A mode only selects the greeting
//! and input placeholder shown to the user; the model prompt is the same for
//! every mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named chat preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChatMode {
    /// General bilingual chat
    #[default]
    Default,
    /// English <-> Bangla translation
    Translate,
    /// Writing assistance
    Write,
    /// Programming help
    Code,
}

/// Static display configuration for a chat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatModeProfile {
    /// Header title
    pub title: &'static str,
    /// Header subtitle
    pub description: &'static str,
    /// Input placeholder
    pub placeholder: &'static str,
    /// Assistant message that seeds the transcript
    pub greeting: &'static str,
}

static DEFAULT_PROFILE: ChatModeProfile = ChatModeProfile {
    title: "General Chat",
    description: "Chat with BondhuBot in English or Bangla",
    placeholder: "Type your message in English or Bangla (ইংরেজি বা বাংলায় লিখুন)...",
    greeting: "Hello! I'm BondhuBot, your bilingual AI assistant. I can help you with writing, \
translation, explanations, and much more. I understand both English and Bangla. How can I assist \
you today? \n\nহ্যালো! আমি BondhuBot, আপনার দ্বিভাষিক AI সহকারী। আমি লেখা, অনুবাদ, ব্যাখ্যা এবং \
আরও অনেক কিছুতে আপনাকে সাহায্য করতে পারি। আমি ইংরেজি এবং বাংলা দুটি ভাষাই বুঝি। আমি আপনাকে কীভাবে \
সাহায্য করতে পারি?",
};

static TRANSLATE_PROFILE: ChatModeProfile = ChatModeProfile {
    title: "Translation Mode",
    description: "Translate between English and Bangla",
    placeholder: "Enter text to translate...",
    greeting: "Welcome to translation mode! I'll help you translate between English and Bangla. \
Just type your text, and I'll provide the translation. \n\nঅনুবাদ মোডে স্বাগতম! আমি আপনাকে ইংরেজি \
এবং বাংলার মধ্যে অনুবাদ করতে সাহায্য করব। আপনি টেক্সট টাইপ করুন, আমি অনুবাদ প্রদান করব।",
};

static WRITE_PROFILE: ChatModeProfile = ChatModeProfile {
    title: "Writing Assistant",
    description: "Get help with writing and editing",
    placeholder: "Enter your text for writing assistance...",
    greeting: "Welcome to writing assistant mode! I can help you improve your writing, suggest \
edits, or help you create new content. What would you like to work on? \n\nলেখা সহায়ক মোডে \
স্বাগতম! আমি আপনার লেখা উন্নত করতে, সম্পাদনা সুপারিশ করতে বা নতুন কন্টেন্ট তৈরি করতে সাহায্য করতে \
পারি। আপনি কী নিয়ে কাজ করতে চান?",
};

static CODE_PROFILE: ChatModeProfile = ChatModeProfile {
    title: "Code Helper",
    description: "Get programming assistance",
    placeholder: "Enter your coding question or paste code...",
    greeting: "Welcome to code helper mode! I can help you with programming questions, explain \
code, or help you debug issues. What programming help do you need? \n\nকোড সহায়ক মোডে স্বাগতম! \
আমি আপনাকে প্রোগ্রামিং প্রশ্নে সাহায্য করতে, কোড ব্যাখ্যা করতে বা ডিবাগ করতে সাহায্য করতে পারি। \
আপনার কী ধরনের প্রোগ্রামিং সাহায্য প্রয়োজন?",
};

impl ChatMode {
    /// Every mode, in dashboard order
    pub const ALL: [ChatMode; 4] = [
        ChatMode::Default,
        ChatMode::Translate,
        ChatMode::Write,
        ChatMode::Code,
    ];

    /// Resolve a raw identifier. Total: anything other than an exact
    /// `translate`, `write` or `code` is `Default`.
    pub fn resolve(id: &str) -> Self {
        match id {
            "translate" => ChatMode::Translate,
            "write" => ChatMode::Write,
            "code" => ChatMode::Code,
            _ => ChatMode::Default,
        }
    }

    /// Resolve the `mode` query parameter of a chat link
    pub fn from_query(value: Option<&str>) -> Self {
        value.map(Self::resolve).unwrap_or_default()
    }

    /// Canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::Default => "default",
            ChatMode::Translate => "translate",
            ChatMode::Write => "write",
            ChatMode::Code => "code",
        }
    }

    /// Value carried in the `mode` query parameter (`None` for the default mode)
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            ChatMode::Default => None,
            other => Some(other.as_str()),
        }
    }

    /// Display profile for this mode
    pub fn profile(&self) -> &'static ChatModeProfile {
        match self {
            ChatMode::Default => &DEFAULT_PROFILE,
            ChatMode::Translate => &TRANSLATE_PROFILE,
            ChatMode::Write => &WRITE_PROFILE,
            ChatMode::Code => &CODE_PROFILE,
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ChatMode {
    fn from(value: String) -> Self {
        Self::resolve(&value)
    }
}

impl From<ChatMode> for String {
    fn from(mode: ChatMode) -> Self {
        mode.as_str().to_string()
    }
}
