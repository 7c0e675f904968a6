//! Thinking Indicator
//!
//! Shown in the transcript while a reply is pending.

use leptos::*;

/// Spinner with bouncing dots, aligned like an assistant message
#[component]
pub fn Thinking() -> impl IntoView {
    view! {
        <div class="flex justify-start">
            <div class="bg-white border border-gray-200 rounded-2xl p-4 shadow-sm flex items-center space-x-3">
                <span class="inline-block loading-spinner w-5 h-5 text-purple-500" />
                <div class="flex space-x-1">
                    <div class="w-2 h-2 bg-purple-500 rounded-full animate-bounce" />
                    <div class="w-2 h-2 bg-purple-500 rounded-full animate-bounce" style="animation-delay: 0.2s" />
                    <div class="w-2 h-2 bg-purple-500 rounded-full animate-bounce" style="animation-delay: 0.4s" />
                </div>
            </div>
        </div>
    }
}
