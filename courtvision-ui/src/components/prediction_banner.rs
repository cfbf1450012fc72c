//! Prediction Banner Component
//!
//! Shows the predicted make probability for the last clicked court point.

use leptos::*;

use crate::state::global::DashboardState;

/// Probability as a percentage string with one decimal, e.g. "42.3%".
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Clicked coordinate summary, e.g. "(250, 120)".
pub fn format_point(x: f64, y: f64) -> String {
    format!("({:.0}, {:.0})", x, y)
}

/// Banner shown once a court point has been clicked
#[component]
pub fn PredictionBanner() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let point = state.selected_point;
    let prediction = state.prediction;

    view! {
        {move || {
            point.get().map(|p| view! {
                <div class="bg-gray-800 rounded-lg p-4 border border-yellow-600/50 flex items-center justify-between">
                    <div>
                        <span class="text-gray-400 text-sm">
                            "Shot from " {format_point(p.x, p.y)}
                        </span>
                        <div class="text-2xl font-bold mt-1">
                            {move || {
                                prediction.get()
                                    .map(|pred| format_probability(pred.probability))
                                    .unwrap_or_else(|| "...".to_string())
                            }}
                        </div>
                    </div>
                    {move || {
                        prediction.get()
                            .and_then(|pred| pred.recommendation)
                            .map(|rec| view! {
                                <span class="text-sm text-yellow-400">{rec}</span>
                            })
                    }}
                </div>
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_probability_one_decimal() {
        assert_eq!(format_probability(0.423), "42.3%");
        assert_eq!(format_probability(0.0), "0.0%");
        assert_eq!(format_probability(1.0), "100.0%");
    }

    #[test]
    fn test_format_probability_rounds() {
        assert_eq!(format_probability(0.55555), "55.6%");
    }

    #[test]
    fn test_format_point_whole_pixels() {
        assert_eq!(format_point(250.4, 119.6), "(250, 120)");
    }
}
