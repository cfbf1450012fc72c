//! Stat Card Components
//!
//! Headline stat tiles for the selected player.

use leptos::*;

use crate::state::global::DashboardState;

/// Field-goal percentage, one decimal place.
pub fn format_fg(fg_percentage: f64) -> String {
    format!("{:.1}%", fg_percentage)
}

/// Hot-hand index, one decimal place.
pub fn format_hot_hand(index: f64) -> String {
    format!("{:.1}", index)
}

/// Label for the hot-hand tile.
pub fn hot_hand_label(index: f64) -> &'static str {
    if index >= 3.0 {
        "On fire"
    } else if index >= 1.0 {
        "Warming up"
    } else {
        "Cold"
    }
}

/// Row of headline stat tiles
#[component]
pub fn StatCards() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let stats = create_memo(move |_| state.game_data.get().player_stats);

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            <StatCard
                label="Field Goal %"
                value=Signal::derive(move || format_fg(stats.get().fg_percentage))
            />
            <StatCard
                label="Points"
                value=Signal::derive(move || stats.get().points.to_string())
            />
            <StatCard
                label="Hot Hand"
                value=Signal::derive(move || format_hot_hand(stats.get().hot_hand_index))
                sublabel=Signal::derive(move || {
                    Some(hot_hand_label(stats.get().hot_hand_index).to_string())
                })
            />
        </div>
    }
}

/// Single stat tile
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional, into)]
    sublabel: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">
                {move || value.get()}
            </div>
            {sublabel.map(|sub| view! {
                <div class="text-sm text-gray-500 mt-1">
                    {move || sub.get()}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::snapshot::PlayerStats;

    #[test]
    fn test_format_fg_one_decimal() {
        assert_eq!(format_fg(55.234), "55.2%");
        assert_eq!(format_fg(0.0), "0.0%");
        assert_eq!(format_fg(100.0), "100.0%");
    }

    #[test]
    fn test_format_hot_hand() {
        assert_eq!(format_hot_hand(3.46), "3.5");
        assert_eq!(format_hot_hand(0.0), "0.0");
    }

    #[test]
    fn test_hot_hand_labels() {
        assert_eq!(hot_hand_label(4.2), "On fire");
        assert_eq!(hot_hand_label(1.5), "Warming up");
        assert_eq!(hot_hand_label(0.3), "Cold");
    }

    #[test]
    fn test_default_stats_render_zeroes() {
        // Missing data renders as zeroed tiles, never panics
        let stats = PlayerStats::default();
        assert_eq!(format_fg(stats.fg_percentage), "0.0%");
        assert_eq!(stats.points.to_string(), "0");
        assert_eq!(format_hot_hand(stats.hot_hand_index), "0.0");
    }
}
