//! Chat Page
//!
//! Transcript for one chat mode. The mode comes from the `mode` query
//! parameter once, on entry; the session holds at most one pending
//! exchange.

use bondhu::navigation::DASHBOARD_PATH;
use bondhu::{ChatMode, ChatSession};
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{MessageBubble, Thinking};

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let query = use_query_map();
    let mode = query.with_untracked(|q| ChatMode::from_query(q.get("mode").map(String::as_str)));
    let profile = mode.profile();

    let session = create_rw_signal(ChatSession::new(mode));
    let (input, set_input) = create_signal(String::new());
    let composing = Signal::derive(move || session.with(|s| s.is_composing()));

    // Scroll to the newest message after each append
    let end_ref = create_node_ref::<html::Div>();
    create_effect(move |_| {
        session.with(|s| s.messages().len());
        composing.get();
        if let Some(end) = end_ref.get() {
            end.scroll_into_view();
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let text = input.get_untracked();
        let mut accepted = None;
        session.update(|s| accepted = s.submit(&text).ok());
        let Some(exchange) = accepted else {
            return;
        };

        set_input.set(String::new());

        spawn_local(async move {
            let outcome = api::send_message(exchange.request()).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Error generating response: {}", e).into());
            }
            session.update(move |s| {
                s.settle(exchange, outcome);
            });
        });
    };

    view! {
        <div class="min-h-screen flex flex-col items-center p-4">
            <div class="w-full max-w-4xl bg-white rounded-2xl shadow-xl overflow-hidden flex flex-col h-[90vh]">
                // Header
                <div class="bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 p-6">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center">
                            <A
                                href=DASHBOARD_PATH
                                class="mr-4 text-white hover:text-white/80 transition-colors flex items-center"
                            >
                                <span class="mr-1">"←"</span>
                                "Back"
                            </A>
                            <div class="bg-white/10 backdrop-blur-md p-3 rounded-xl mr-4 text-2xl">"🤖"</div>
                            <div>
                                <h1 class="text-2xl font-bold text-white">{profile.title}</h1>
                                <p class="text-white/80 text-sm">{profile.description}</p>
                            </div>
                        </div>
                        <div class="flex items-center space-x-2">
                            <span class="text-white/80">"✨"</span>
                            <span class="text-white/80 text-sm">"AI Powered"</span>
                        </div>
                    </div>
                </div>

                // Transcript
                <div class="flex-1 overflow-y-auto p-6 space-y-6 bg-gradient-to-b from-gray-50 to-white">
                    <For
                        each=move || session.with(|s| s.messages().to_vec())
                        key=|message| message.id
                        children=move |message| view! { <MessageBubble message=message /> }
                    />

                    {move || {
                        if composing.get() {
                            view! { <Thinking /> }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}

                    <div node_ref=end_ref />
                </div>

                // Composer
                <div class="border-t border-gray-100 bg-white p-6">
                    <form on:submit=on_submit class="flex space-x-4">
                        <input
                            type="text"
                            placeholder=profile.placeholder
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            class="flex-1 bg-gray-50 border border-gray-200 rounded-xl px-6 py-4
                                   focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent"
                        />
                        <button
                            type="submit"
                            disabled=move || composing.get()
                            class="bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-xl px-6 py-4
                                   transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            "Send"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
