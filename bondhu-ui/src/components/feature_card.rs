//! Feature Card Component
//!
//! Dashboard shortcut that opens the chat view in a given mode.

use bondhu::DashboardFeature;
use leptos::*;
use leptos_router::*;

/// Icon shown on a dashboard shortcut
fn feature_icon(feature: &DashboardFeature) -> &'static str {
    match feature.mode {
        bondhu::ChatMode::Default => "💬",
        bondhu::ChatMode::Translate => "🌐",
        bondhu::ChatMode::Write => "✏️",
        bondhu::ChatMode::Code => "💻",
    }
}

#[component]
pub fn FeatureCard(feature: DashboardFeature) -> impl IntoView {
    let href = feature.route().path();

    view! {
        <A
            href=href
            class="group relative bg-white rounded-2xl shadow-lg overflow-hidden hover:shadow-xl transition-all duration-300 transform hover:-translate-y-1"
        >
            <div class=format!(
                "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-100 transition-opacity duration-300",
                feature.accent
            ) />
            <div class="relative p-6">
                <div class=format!(
                    "w-12 h-12 rounded-xl bg-gradient-to-br {} flex items-center justify-center text-white text-2xl mb-4",
                    feature.accent
                )>
                    {feature_icon(&feature)}
                </div>
                <h3 class="text-xl font-semibold text-gray-900 mb-2 group-hover:text-white transition-colors duration-300">
                    {feature.title}
                </h3>
                <p class="text-gray-600 group-hover:text-white/90 transition-colors duration-300">
                    {feature.description}
                </p>
            </div>
        </A>
    }
}
