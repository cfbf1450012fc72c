//! Court Component
//!
//! Half-court diagram on HTML5 Canvas: court markings, shot heatmap,
//! defender overlay, and click-to-predict.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::state::global::{CourtPoint, DashboardState};
use crate::state::snapshot::{Defender, HeatPoint};

/// Court dimensions in canvas pixels, 10 px per foot.
pub const COURT_WIDTH: f64 = 500.0;
pub const COURT_HEIGHT: f64 = 470.0;

/// Basket center.
pub const BASKET_X: f64 = 250.0;
pub const BASKET_Y: f64 = 47.5;

/// Three-point geometry: 23.75 ft arc, corner lines 3 ft in from the sideline.
const THREE_POINT_RADIUS: f64 = 237.5;
const CORNER_THREE_X: f64 = 220.0;

/// Multiplier turning a defender's per-tick velocity into a visible vector.
pub const VELOCITY_SCALE: f64 = 20.0;

/// Where a defender's movement vector ends on the canvas.
pub fn defender_vector_end(defender: &Defender) -> (f64, f64) {
    (
        defender.x + defender.velocity_x * VELOCITY_SCALE,
        defender.y + defender.velocity_y * VELOCITY_SCALE,
    )
}

/// Heatmap marker opacity equals the shot probability, clamped to [0, 1].
pub fn heat_marker_alpha(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Defenders to draw for the current overlay toggle.
pub fn visible_defenders(show: bool, defenders: &[Defender]) -> &[Defender] {
    if show {
        defenders
    } else {
        &[]
    }
}

/// Y coordinate where the corner-three lines meet the arc.
pub fn three_point_corner_y() -> f64 {
    BASKET_Y + (THREE_POINT_RADIUS.powi(2) - CORNER_THREE_X.powi(2)).sqrt()
}

/// Map a click from CSS pixels to court pixels.
///
/// The canvas scales with layout, so client coordinates are rescaled by the
/// layout rect. A degenerate rect (hidden canvas mid-click) yields no point
/// rather than non-finite coordinates.
pub fn canvas_point(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> Option<CourtPoint> {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return None;
    }
    Some(CourtPoint {
        x: (client_x - rect_left) * (COURT_WIDTH / rect_width),
        y: (client_y - rect_top) * (COURT_HEIGHT / rect_height),
    })
}

/// Interactive court view
#[component]
pub fn CourtView() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the snapshot or the overlay toggle changes
    let draw_state = state.clone();
    create_effect(move |_| {
        let data = draw_state.game_data.get();
        let show_defenders = draw_state.show_defenders.get();
        let selected = draw_state.selected_point.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_court(&canvas, &data.heatmap_data, visible_defenders(show_defenders, &data.defensive_data), selected);
        }
    });

    let click_state = state.clone();
    let on_click = move |event: MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };

        let rect = canvas.get_bounding_client_rect();
        let Some(point) = canvas_point(
            event.client_x() as f64,
            event.client_y() as f64,
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ) else {
            return;
        };

        click_state.select_point(point);

        let state = click_state.clone();
        spawn_local(async move {
            match crate::api::fetch_prediction(point.x, point.y).await {
                Ok(prediction) => state.prediction.set(Some(prediction)),
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between mb-3">
                <h2 class="text-lg font-semibold">"Shot Chart"</h2>
                <DefenderToggle />
            </div>
            <canvas
                node_ref=canvas_ref
                width="500"
                height="470"
                class="w-full rounded-lg cursor-crosshair"
                on:click=on_click
            />
        </div>
    }
}

/// Defender overlay toggle button
#[component]
fn DefenderToggle() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let show = state.show_defenders;
    let toggle_state = state.clone();

    view! {
        <button
            on:click=move |_| toggle_state.toggle_defenders()
            class=move || {
                let base = "px-3 py-1 rounded-lg text-sm font-medium transition-colors";
                if show.get() {
                    format!("{} bg-red-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {move || if show.get() { "Defenders: On" } else { "Defenders: Off" }}
        </button>
    }
}

/// Draw the full court scene: markings, then heatmap, then defenders.
fn draw_court(
    canvas: &HtmlCanvasElement,
    heatmap: &[HeatPoint],
    defenders: &[Defender],
    selected: Option<CourtPoint>,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    // Hardwood background
    ctx.set_fill_style(&"#c8922e".into());
    ctx.fill_rect(0.0, 0.0, COURT_WIDTH, COURT_HEIGHT);

    draw_markings(&ctx);
    draw_heatmap(&ctx, heatmap);
    draw_defenders(&ctx, defenders);

    if let Some(point) = selected {
        draw_selection(&ctx, point);
    }
}

/// Court lines: boundary, three-point line, key, free-throw circle, basket.
fn draw_markings(ctx: &CanvasRenderingContext2d) {
    ctx.set_stroke_style(&"#ffffff".into());
    ctx.set_line_width(2.0);

    // Boundary
    ctx.stroke_rect(1.0, 1.0, COURT_WIDTH - 2.0, COURT_HEIGHT - 2.0);

    // Three-point line: two corner lines plus the arc joining them
    let corner_y = three_point_corner_y();
    let left_x = BASKET_X - CORNER_THREE_X;
    let right_x = BASKET_X + CORNER_THREE_X;

    ctx.begin_path();
    ctx.move_to(left_x, 0.0);
    ctx.line_to(left_x, corner_y);
    ctx.stroke();

    ctx.begin_path();
    ctx.move_to(right_x, 0.0);
    ctx.line_to(right_x, corner_y);
    ctx.stroke();

    let dy = corner_y - BASKET_Y;
    let start_angle = dy.atan2(CORNER_THREE_X);
    let end_angle = dy.atan2(-CORNER_THREE_X);
    ctx.begin_path();
    let _ = ctx.arc(BASKET_X, BASKET_Y, THREE_POINT_RADIUS, start_angle, end_angle);
    ctx.stroke();

    // The key (16 ft wide, 19 ft deep)
    ctx.stroke_rect(BASKET_X - 80.0, 0.0, 160.0, 190.0);

    // Free-throw circle
    ctx.begin_path();
    let _ = ctx.arc(BASKET_X, 190.0, 60.0, 0.0, std::f64::consts::PI * 2.0);
    ctx.stroke();

    // Basket
    ctx.set_stroke_style(&"#ff6b35".into());
    ctx.begin_path();
    let _ = ctx.arc(BASKET_X, BASKET_Y, 7.5, 0.0, std::f64::consts::PI * 2.0);
    ctx.stroke();
}

/// Shot markers whose opacity encodes the make probability.
fn draw_heatmap(ctx: &CanvasRenderingContext2d, heatmap: &[HeatPoint]) {
    for point in heatmap {
        ctx.set_global_alpha(heat_marker_alpha(point.probability));
        ctx.set_fill_style(&"#e63946".into());
        ctx.begin_path();
        let _ = ctx.arc(point.x, point.y, 8.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}

/// Defender markers with their scaled movement vectors.
fn draw_defenders(ctx: &CanvasRenderingContext2d, defenders: &[Defender]) {
    for defender in defenders {
        ctx.set_fill_style(&"#1d3557".into());
        ctx.begin_path();
        let _ = ctx.arc(defender.x, defender.y, 6.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        let (end_x, end_y) = defender_vector_end(defender);
        ctx.set_stroke_style(&"#1d3557".into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(defender.x, defender.y);
        ctx.line_to(end_x, end_y);
        ctx.stroke();
    }
}

/// Crosshair ring on the last clicked point.
fn draw_selection(ctx: &CanvasRenderingContext2d, point: CourtPoint) {
    ctx.set_stroke_style(&"#ffd166".into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    let _ = ctx.arc(point.x, point.y, 10.0, 0.0, std::f64::consts::PI * 2.0);
    ctx.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defender(x: f64, y: f64, vx: f64, vy: f64) -> Defender {
        Defender {
            x,
            y,
            velocity_x: vx,
            velocity_y: vy,
        }
    }

    #[test]
    fn test_vector_end_scales_velocity() {
        let d = defender(100.0, 100.0, 2.0, -1.0);
        assert_eq!(defender_vector_end(&d), (140.0, 80.0));
    }

    #[test]
    fn test_vector_end_stationary_defender() {
        let d = defender(250.0, 200.0, 0.0, 0.0);
        assert_eq!(defender_vector_end(&d), (250.0, 200.0));
    }

    #[test]
    fn test_heat_alpha_equals_probability() {
        assert_eq!(heat_marker_alpha(0.42), 0.42);
        assert_eq!(heat_marker_alpha(0.0), 0.0);
        assert_eq!(heat_marker_alpha(1.0), 1.0);
    }

    #[test]
    fn test_heat_alpha_clamps_out_of_range() {
        assert_eq!(heat_marker_alpha(-0.5), 0.0);
        assert_eq!(heat_marker_alpha(1.7), 1.0);
    }

    #[test]
    fn test_defender_toggle_round_trip() {
        let defenders = vec![defender(100.0, 100.0, 1.0, 1.0)];
        assert!(visible_defenders(false, &defenders).is_empty());
        assert_eq!(visible_defenders(true, &defenders).len(), 1);
    }

    #[test]
    fn test_canvas_point_rescales_layout_pixels() {
        // Canvas rendered at half size: a click at its center maps to the
        // center of the court
        let point = canvas_point(135.0, 127.5, 10.0, 10.0, 250.0, 235.0).unwrap();
        assert_eq!(point.x, 250.0);
        assert_eq!(point.y, 235.0);
    }

    #[test]
    fn test_canvas_point_identity_at_native_size() {
        let point = canvas_point(250.0, 20.0, 0.0, 0.0, 500.0, 470.0).unwrap();
        assert_eq!(point.x, 250.0);
        assert_eq!(point.y, 20.0);
    }

    #[test]
    fn test_canvas_point_rejects_degenerate_rect() {
        assert!(canvas_point(100.0, 100.0, 0.0, 0.0, 0.0, 470.0).is_none());
        assert!(canvas_point(100.0, 100.0, 0.0, 0.0, 500.0, 0.0).is_none());
    }

    #[test]
    fn test_corner_three_meets_arc() {
        let corner_y = three_point_corner_y();
        // The corner point must sit exactly on the 23.75 ft arc
        let dist = (CORNER_THREE_X.powi(2) + (corner_y - BASKET_Y).powi(2)).sqrt();
        assert!((dist - THREE_POINT_RADIUS).abs() < 1e-9);
        assert!(corner_y > 0.0 && corner_y < COURT_HEIGHT);
    }
}
