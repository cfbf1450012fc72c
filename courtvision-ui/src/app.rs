//! App Root Component
//!
//! Main application layout with global providers.

use leptos::*;

use crate::api;
use crate::components::{CourtView, Loading, PerformanceChart, PredictionBanner, StatCards, Toast};
use crate::state::global::{provide_dashboard_state, DashboardState};
use crate::state::websocket::init_stream;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Initial fetch, then live updates over the stream
    state.refresh();
    init_stream(state.clone(), &api::get_api_base());

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-6 pb-20 space-y-4">
                {
                    let state = use_context::<DashboardState>().expect("DashboardState not found");
                    move || {
                        // Spinner until the opening snapshot lands; later
                        // refreshes keep the stale view on screen instead
                        if state.loading.get() && state.game_data.get().players.is_empty() {
                            view! { <Loading /> }.into_view()
                        } else {
                            view! {
                                <StatCards />
                                <PredictionBanner />
                                <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                                    <CourtView />
                                    <PerformanceChart />
                                </div>
                            }
                            .into_view()
                        }
                    }
                }
            </main>

            <Footer />
            <Toast />
        </div>
    }
}

/// Header with title, player selector, and refresh
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let players = create_memo({
        let state = state.clone();
        move |_| state.game_data.get().players
    });

    let select_state = state.clone();
    let on_select = move |ev| {
        let value = event_target_value(&ev);
        let player = if value.is_empty() { None } else { Some(value) };
        select_state.selected_player.set(player);
        select_state.refresh();
    };

    let refresh_state = state.clone();

    view! {
        <header class="bg-gray-800 border-b border-gray-700 px-4 py-3">
            <div class="container mx-auto flex items-center justify-between">
                <h1 class="text-xl font-bold">"CourtVision"</h1>

                <div class="flex items-center space-x-3">
                    <select
                        on:change=on_select
                        class="bg-gray-700 text-white rounded-lg px-3 py-2 text-sm"
                    >
                        <option value="">"Team"</option>
                        {move || {
                            players.get()
                                .into_iter()
                                .map(|p| view! {
                                    <option value=p.id.clone()>{p.name.clone()}</option>
                                })
                                .collect_view()
                        }}
                    </select>

                    <button
                        on:click=move |_| refresh_state.refresh()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg \
                               text-sm font-medium transition-colors"
                    >
                        "Refresh"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Footer showing connection status and last data arrival
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Stream status
                <div class="flex items-center space-x-2">
                    {move || {
                        if state.ws_connected.get() {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"Live"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Disconnected"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                // Last update time
                <div class="text-gray-400">
                    {move || {
                        state.last_update.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Updated: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Waiting for data".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
