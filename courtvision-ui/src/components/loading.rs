//! Loading Component

use leptos::*;

/// Full-page loading spinner, shown while the opening snapshot is fetched
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
