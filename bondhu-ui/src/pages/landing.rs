//! Landing Page
//!
//! Hero, features, benefits and a call to action. Every call to action
//! leads to the dashboard.

use bondhu::navigation::DASHBOARD_PATH;
use leptos::*;
use leptos_router::*;

/// (icon, title, description)
const FEATURES: [(&str, &str, &str); 4] = [
    ("🌐", "Bilingual Support", "Fluent in both English and Bangla for natural conversations"),
    ("💬", "Smart Chat", "Context-aware responses for meaningful interactions"),
    ("💻", "Code Assistant", "Get help with programming in any language"),
    ("🤖", "AI Powered", "Advanced AI for accurate and helpful responses"),
];

const BENEFITS: [(&str, &str, &str); 3] = [
    ("🌍", "Break Language Barriers", "Communicate effortlessly in both English and Bangla"),
    ("⚡", "Instant Responses", "Get quick and accurate assistance whenever you need"),
    ("🛡️", "Secure & Private", "Your conversations are protected and confidential"),
];

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            // Hero
            <div class="relative overflow-hidden">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="relative z-10 py-24 md:py-32 text-center">
                        <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                            "Meet BondhuBot"
                            <span class="block text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-purple-600">
                                "Your Bilingual AI Assistant"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-600 mb-8 max-w-3xl mx-auto">
                            "Seamlessly communicate in English and Bangla with an AI assistant that understands your needs"
                        </p>
                        <A
                            href=DASHBOARD_PATH
                            class="inline-flex items-center px-8 py-4 text-lg font-medium text-white bg-gradient-to-r from-blue-600 to-purple-600 rounded-full shadow-lg hover:shadow-xl transition-all duration-200"
                        >
                            "Get Started"
                            <span class="ml-2">"→"</span>
                        </A>
                    </div>
                </div>
            </div>

            // Features
            <div class="py-24 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "Powerful Features for Seamless Communication"
                        </h2>
                        <p class="text-xl text-gray-600">
                            "Everything you need for effective bilingual communication"
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {FEATURES.iter().map(|(icon, title, description)| view! {
                            <div class="bg-gray-50 rounded-2xl p-8 text-center hover:bg-gray-100 transition-colors duration-200">
                                <div class="inline-flex items-center justify-center w-16 h-16 rounded-xl bg-gradient-to-r from-blue-500 to-purple-600 text-white text-3xl mb-6">
                                    {*icon}
                                </div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-4">{*title}</h3>
                                <p class="text-gray-600">{*description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            // Benefits
            <div class="py-24">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-12">
                        {BENEFITS.iter().map(|(icon, title, description)| view! {
                            <div class="text-center">
                                <div class="inline-block text-5xl mb-6">{*icon}</div>
                                <h3 class="text-2xl font-semibold text-gray-900 mb-4">{*title}</h3>
                                <p class="text-gray-600">{*description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            // Call to action
            <div class="bg-gradient-to-r from-blue-600 to-purple-600 py-16">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold text-white mb-8">
                        "Ready to Start Your Bilingual Journey?"
                    </h2>
                    <A
                        href=DASHBOARD_PATH
                        class="inline-flex items-center px-8 py-4 text-lg font-medium text-blue-600 bg-white rounded-full shadow-lg hover:bg-gray-50 transition-all duration-200"
                    >
                        "Try BondhuBot Now"
                        <span class="ml-2">"→"</span>
                    </A>
                </div>
            </div>
        </div>
    }
}
