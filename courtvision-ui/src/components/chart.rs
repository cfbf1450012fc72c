//! Performance Chart Component
//!
//! Time-series chart of shooting performance using HTML5 Canvas, with the
//! time-range selector that drives the data refetch.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{DashboardState, TimeRange};
use crate::state::snapshot::PerformanceSample;

/// Series colors: field-goal percentage, hot-hand index.
const FG_COLOR: &str = "#FF9800";
const HOT_HAND_COLOR: &str = "#2196F3";

/// Hot-hand index lives on a 0..10 scale; stretch it onto the percent axis.
const HOT_HAND_AXIS_SCALE: f64 = 10.0;

/// X pixel for sample `i` of `count` evenly spaced samples.
pub fn sample_x(i: usize, count: usize, margin_left: f64, chart_width: f64) -> f64 {
    if count <= 1 {
        return margin_left;
    }
    margin_left + (i as f64 / (count - 1) as f64) * chart_width
}

/// Y pixel for a value on the shared 0..axis_max axis.
pub fn value_y(value: f64, axis_max: f64, margin_top: f64, chart_height: f64) -> f64 {
    margin_top + ((axis_max - value) / axis_max) * chart_height
}

/// Top of the shared axis: the larger of 100% and the tallest scaled sample.
pub fn axis_max(samples: &[PerformanceSample]) -> f64 {
    let mut max = 100.0f64;
    for sample in samples {
        max = max
            .max(sample.fg_percentage)
            .max(sample.hot_hand_index * HOT_HAND_AXIS_SCALE);
    }
    max
}

/// Performance chart with time-range selector
#[component]
pub fn PerformanceChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the performance series changes
    let draw_state = state.clone();
    create_effect(move |_| {
        let data = draw_state.game_data.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &data.performance_data);
        }
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between mb-3">
                <h2 class="text-lg font-semibold">"Performance"</h2>
                <ChartLegend />
            </div>

            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-48 md:h-64 rounded-lg"
            />

            // Time range selector
            <div class="flex justify-center space-x-2 mt-4">
                {TimeRange::ALL
                    .into_iter()
                    .map(|range| view! { <TimeRangeButton range=range /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Legend showing series colors
#[component]
fn ChartLegend() -> impl IntoView {
    let entries = [("FG%", FG_COLOR), ("Hot Hand (x10)", HOT_HAND_COLOR)];

    view! {
        <div class="flex gap-4">
            {entries
                .into_iter()
                .map(|(label, color)| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", color)
                        />
                        <span class="text-sm text-gray-300">{label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Time range selection button
#[component]
fn TimeRangeButton(range: TimeRange) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let current = state.time_range;
    let is_active = create_memo(move |_| current.get() == range);

    let state_for_click = state;
    let on_click = move |_| {
        state_for_click.time_range.set(range);
        state_for_click.refresh();
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {range.label()}
        </button>
    }
}

/// Draw both performance series on canvas
fn draw_chart(canvas: &HtmlCanvasElement, samples: &[PerformanceSample]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if samples.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected range", width / 2.0 - 80.0, height / 2.0);
        return;
    }

    let max = axis_max(samples);

    // Horizontal grid lines with axis labels
    ctx.set_stroke_style(&"#374151".into());
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    draw_series(&ctx, samples, max, margin_left, margin_top, chart_width, chart_height, FG_COLOR, |s| s.fg_percentage);
    draw_series(&ctx, samples, max, margin_left, margin_top, chart_width, chart_height, HOT_HAND_COLOR, |s| {
        s.hot_hand_index * HOT_HAND_AXIS_SCALE
    });

    // X-axis labels: first, middle, last game-clock labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let label_indices = [0, samples.len() / 2, samples.len() - 1];
    for &i in &label_indices {
        let x = sample_x(i, samples.len(), margin_left, chart_width);
        let _ = ctx.fill_text(&samples[i].time, x - 15.0, height - 10.0);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_series(
    ctx: &CanvasRenderingContext2d,
    samples: &[PerformanceSample],
    max: f64,
    margin_left: f64,
    margin_top: f64,
    chart_width: f64,
    chart_height: f64,
    color: &str,
    value: impl Fn(&PerformanceSample) -> f64,
) {
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, sample) in samples.iter().enumerate() {
        let x = sample_x(i, samples.len(), margin_left, chart_width);
        let y = value_y(value(sample), max, margin_top, chart_height);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Sample dots
    ctx.set_fill_style(&color.into());
    for (i, sample) in samples.iter().enumerate() {
        let x = sample_x(i, samples.len(), margin_left, chart_width);
        let y = value_y(value(sample), max, margin_top, chart_height);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: &str, fg: f64, hot: f64) -> PerformanceSample {
        PerformanceSample {
            time: time.to_string(),
            fg_percentage: fg,
            hot_hand_index: hot,
        }
    }

    #[test]
    fn test_sample_x_spans_chart() {
        assert_eq!(sample_x(0, 5, 50.0, 400.0), 50.0);
        assert_eq!(sample_x(4, 5, 50.0, 400.0), 450.0);
        assert_eq!(sample_x(2, 5, 50.0, 400.0), 250.0);
    }

    #[test]
    fn test_sample_x_single_point_pins_left() {
        assert_eq!(sample_x(0, 1, 50.0, 400.0), 50.0);
    }

    #[test]
    fn test_value_y_inverts_axis() {
        // Canvas y grows downward, so the axis max sits at the top margin
        assert_eq!(value_y(100.0, 100.0, 20.0, 240.0), 20.0);
        assert_eq!(value_y(0.0, 100.0, 20.0, 240.0), 260.0);
        assert_eq!(value_y(50.0, 100.0, 20.0, 240.0), 140.0);
    }

    #[test]
    fn test_axis_max_defaults_to_percent_scale() {
        let samples = vec![sample("Q1 10:00", 45.0, 3.0)];
        assert_eq!(axis_max(&samples), 100.0);
    }

    #[test]
    fn test_axis_max_follows_scaled_hot_hand() {
        // Hot hand of 12 scales to 120 and pushes the axis up
        let samples = vec![sample("Q1 10:00", 45.0, 12.0)];
        assert_eq!(axis_max(&samples), 120.0);
    }
}
