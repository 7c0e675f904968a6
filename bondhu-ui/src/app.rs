//! App Root Component
//!
//! Main application component with routing.

use bondhu::navigation::{CHAT_PATH, DASHBOARD_PATH, LANDING_PATH};
use leptos::*;
use leptos_router::*;

use crate::pages::{Chat, Dashboard, Landing};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gradient-to-br from-blue-50 via-purple-50 to-pink-50 text-gray-900">
                <Routes>
                    <Route path=LANDING_PATH view=Landing />
                    <Route path=DASHBOARD_PATH view=Dashboard />
                    <Route path=CHAT_PATH view=Chat />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=LANDING_PATH
                class="px-6 py-3 text-white bg-gradient-to-r from-blue-600 to-purple-600 rounded-full font-medium transition-colors"
            >
                "Go to Home"
            </A>
        </div>
    }
}
