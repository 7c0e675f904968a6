//! Dashboard Page
//!
//! Shortcuts into each chat mode plus static stats and tips.

use bondhu::DASHBOARD_FEATURES;
use leptos::*;

use crate::components::{DashboardNav, FeatureCard};

/// (value, title, badge color)
const QUICK_STATS: [(&str, &str, &str); 3] = [
    ("128", "Total Conversations", "bg-blue-500"),
    ("2", "Languages Used", "bg-purple-500"),
    ("5.2 hrs", "Time Saved", "bg-pink-500"),
];

const QUICK_TIPS: [&str; 4] = [
    "Use both English and Bangla freely",
    "Ask for translations anytime",
    "Get writing help for any content",
    "Request code explanations",
];

const WHATS_NEW: [&str; 4] = [
    "Enhanced translation accuracy",
    "New writing assistance features",
    "Improved code helper",
    "Better context understanding",
];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            <DashboardNav />

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-24 pb-12">
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-bold text-gray-900 mb-4">
                        "Welcome to BondhuBot Dashboard"
                    </h1>
                    <p class="text-lg text-gray-600">
                        "Your bilingual AI assistant for seamless communication"
                    </p>
                </div>

                // Quick stats
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-12">
                    {QUICK_STATS.iter().map(|(value, title, color)| view! {
                        <div class="bg-white rounded-2xl shadow-lg p-6">
                            <div class=format!("w-12 h-12 {} rounded-xl flex items-center justify-center text-white text-2xl mb-4", color)>
                                "🤖"
                            </div>
                            <h3 class="text-2xl font-bold text-gray-900">{*value}</h3>
                            <p class="text-gray-600">{*title}</p>
                        </div>
                    }).collect_view()}
                </div>

                // Chat shortcuts
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                    {DASHBOARD_FEATURES.iter().map(|feature| view! {
                        <FeatureCard feature=*feature />
                    }).collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <InfoCard icon="📖" title="Quick Tips" items=&QUICK_TIPS />
                    <InfoCard icon="🤖" title="What's New" items=&WHATS_NEW />
                </div>
            </main>
        </div>
    }
}

/// Titled bullet list
#[component]
fn InfoCard(
    icon: &'static str,
    title: &'static str,
    items: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-lg p-6">
            <div class="flex items-center mb-4">
                <span class="text-2xl text-purple-600">{icon}</span>
                <h2 class="ml-2 text-xl font-semibold">{title}</h2>
            </div>
            <ul class="space-y-3 text-gray-600">
                {items.iter().map(|item| view! { <li>"• " {*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
