//! Navigation Component
//!
//! Dashboard header with brand, notifications and profile menus. The
//! toggles only affect what is shown; none of them touch chat data.

use bondhu::navigation::DASHBOARD_PATH;
use leptos::*;
use leptos_router::*;

/// A notification in the dashboard dropdown
struct Notification {
    title: &'static str,
    message: &'static str,
    time: &'static str,
}

const NOTIFICATIONS: [Notification; 2] = [
    Notification {
        title: "New Feature Available",
        message: "Try our enhanced translation capabilities!",
        time: "2 hours ago",
    },
    Notification {
        title: "System Update",
        message: "BondhuBot has been updated with new features",
        time: "1 day ago",
    },
];

/// Navigation header for the dashboard
#[component]
pub fn DashboardNav() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let (notifications_open, set_notifications_open) = create_signal(false);
    let (profile_open, set_profile_open) = create_signal(false);

    view! {
        <nav class="bg-white border-b border-gray-100 fixed w-full top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            class="md:hidden p-2 rounded-md text-gray-500 hover:text-gray-700"
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                        <A href=DASHBOARD_PATH class="flex items-center">
                            <span class="text-2xl">"🤖"</span>
                            <span class="ml-2 text-xl font-bold text-gray-900">"BondhuBot"</span>
                        </A>
                    </div>

                    // Desktop actions
                    <div class="hidden md:flex items-center space-x-4">
                        <button
                            on:click=move |_| set_notifications_open.update(|open| *open = !*open)
                            class="relative p-2 text-gray-500 hover:text-gray-700"
                        >
                            <span>"🔔"</span>
                            <span class="absolute top-0 right-0 h-2 w-2 bg-red-500 rounded-full" />
                        </button>
                        <button
                            on:click=move |_| set_profile_open.update(|open| *open = !*open)
                            class="flex items-center space-x-2 p-2 text-gray-500 hover:text-gray-700"
                        >
                            <span>"👤"</span>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            {move || {
                if menu_open.get() {
                    view! {
                        <div class="md:hidden bg-white border-t border-gray-100">
                            <div class="px-2 pt-2 pb-3 space-y-1">
                                <button
                                    on:click=move |_| set_notifications_open.update(|open| *open = !*open)
                                    class="block w-full text-left px-3 py-2 rounded-md text-base font-medium text-gray-700 hover:bg-gray-50"
                                >
                                    "Notifications"
                                </button>
                                <LogoutButton class="block w-full text-left px-3 py-2 rounded-md text-base font-medium text-gray-700 hover:bg-gray-50" />
                            </div>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Notifications dropdown
            {move || {
                if notifications_open.get() {
                    view! {
                        <div class="absolute right-0 mt-2 w-80 bg-white rounded-lg shadow-lg overflow-hidden z-50">
                            <div class="p-4">
                                <h3 class="text-lg font-semibold text-gray-900 mb-4">"Notifications"</h3>
                                <div class="space-y-4">
                                    {NOTIFICATIONS.iter().map(|n| view! {
                                        <div class="flex items-start space-x-4">
                                            <span class="flex-shrink-0 text-purple-600">"🔔"</span>
                                            <div class="flex-1">
                                                <p class="font-medium text-gray-900">{n.title}</p>
                                                <p class="text-sm text-gray-600">{n.message}</p>
                                                <p class="text-xs text-gray-500 mt-1">{n.time}</p>
                                            </div>
                                        </div>
                                    }).collect_view()}
                                </div>
                            </div>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Profile dropdown
            {move || {
                if profile_open.get() {
                    view! {
                        <div class="absolute right-0 mt-2 w-48 bg-white rounded-lg shadow-lg overflow-hidden z-50">
                            <div class="py-1">
                                <LogoutButton class="block w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-100" />
                            </div>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </nav>
    }
}

/// Logout entry. There are no accounts, so this only logs.
#[component]
fn LogoutButton(class: &'static str) -> impl IntoView {
    view! {
        <button
            on:click=|_| web_sys::console::log_1(&"Logout clicked".into())
            class=class
        >
            "Logout"
        </button>
    }
}
