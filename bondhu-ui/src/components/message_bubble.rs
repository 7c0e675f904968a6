//! Message Bubble Component
//!
//! One transcript entry: markdown body plus its time label. User messages
//! sit on the right, assistant messages on the left.

use bondhu::{render_markdown, ChatMessage};
use leptos::*;

/// Transcript message
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();
    let html = render_markdown(&message.text);
    let time = message.time_label();

    let (row_class, bubble_class, prose_class, time_class) = if is_user {
        (
            "flex justify-end",
            "max-w-[80%] rounded-2xl p-4 bg-gradient-to-br from-blue-500 to-purple-600 text-white",
            "prose text-white max-w-none",
            "text-xs mt-2 text-white/70",
        )
    } else {
        (
            "flex justify-start",
            "max-w-[80%] rounded-2xl p-4 bg-white border border-gray-200 shadow-sm",
            "prose text-gray-800 max-w-none",
            "text-xs mt-2 text-gray-500",
        )
    };

    view! {
        <div class=row_class>
            <div class=bubble_class>
                <div class=prose_class inner_html=html />
                <div class=time_class>{time}</div>
            </div>
        </div>
    }
}
