//! Global Dashboard State
//!
//! Reactive state management using Leptos signals. Every user action and
//! every piece of inbound data flows through one entry point here, so the
//! merge/replace semantics stay auditable in one place.

use leptos::*;
use serde::Deserialize;

use super::snapshot::{GameSnapshot, SnapshotUpdate};

/// Global dashboard state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    /// The full game-data snapshot
    pub game_data: RwSignal<GameSnapshot>,
    /// Currently selected player id (None = team view)
    pub selected_player: RwSignal<Option<String>>,
    /// Current time-range filter
    pub time_range: RwSignal<TimeRange>,
    /// Defender-overlay toggle
    pub show_defenders: RwSignal<bool>,
    /// Last court click, if any
    pub selected_point: RwSignal<Option<CourtPoint>>,
    /// Prediction for the last court click
    pub prediction: RwSignal<Option<ShotPrediction>>,
    /// Global loading state (initial fetch / manual refresh)
    pub loading: RwSignal<bool>,
    /// WebSocket connection status
    pub ws_connected: RwSignal<bool>,
    /// Last data arrival timestamp (ms)
    pub last_update: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// A clicked court coordinate, in court pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CourtPoint {
    pub x: f64,
    pub y: f64,
}

/// Response of `POST /api/predict`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ShotPrediction {
    pub probability: f64,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Time-range filter for the performance series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeRange {
    Quarter(u8),
    Half,
    #[default]
    Game,
}

impl TimeRange {
    /// All selectable ranges, in display order.
    pub const ALL: [TimeRange; 6] = [
        TimeRange::Quarter(1),
        TimeRange::Quarter(2),
        TimeRange::Quarter(3),
        TimeRange::Quarter(4),
        TimeRange::Half,
        TimeRange::Game,
    ];

    /// Query-parameter key understood by the API.
    pub fn key(&self) -> String {
        match self {
            TimeRange::Quarter(q) => format!("q{}", q),
            TimeRange::Half => "half".to_string(),
            TimeRange::Game => "game".to_string(),
        }
    }

    /// Short button label.
    pub fn label(&self) -> String {
        match self {
            TimeRange::Quarter(q) => format!("Q{}", q),
            TimeRange::Half => "1st Half".to_string(),
            TimeRange::Game => "Game".to_string(),
        }
    }
}

impl DashboardState {
    /// Fresh state: empty snapshot, defenders shown, nothing selected.
    pub fn new() -> Self {
        Self {
            game_data: create_rw_signal(GameSnapshot::default()),
            selected_player: create_rw_signal(None),
            time_range: create_rw_signal(TimeRange::default()),
            show_defenders: create_rw_signal(true),
            selected_point: create_rw_signal(None),
            prediction: create_rw_signal(None),
            loading: create_rw_signal(false),
            ws_connected: create_rw_signal(false),
            last_update: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    /// Shallow-merge a streamed update into the snapshot.
    ///
    /// Called once per inbound frame, in arrival order.
    pub fn apply_update(&self, update: SnapshotUpdate) {
        self.game_data.update(|data| data.apply(update));
    }

    /// Record a court click. The prediction fetch is wired separately so
    /// the point is set even when the request fails.
    pub fn select_point(&self, point: CourtPoint) {
        self.selected_point.set(Some(point));
        self.prediction.set(None);
    }

    /// Flip the defender overlay.
    pub fn toggle_defenders(&self) {
        self.show_defenders.update(|show| *show = !*show);
    }

    /// Fetch the snapshot for the current player/range selection,
    /// replacing the in-memory snapshot wholesale on success.
    ///
    /// Failures are logged and the previous snapshot stays on screen;
    /// the loading flag clears on both arms.
    pub fn refresh(&self) {
        let state = self.clone();
        spawn_local(async move {
            state.loading.set(true);

            let player = state.selected_player.get_untracked();
            let range = state.time_range.get_untracked().key();

            match crate::api::fetch_game_data(player.as_deref(), &range).await {
                Ok(snapshot) => {
                    state.game_data.set(snapshot);
                    state
                        .last_update
                        .set(Some(chrono::Utc::now().timestamp_millis()));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch game data: {}", e).into(),
                    );
                }
            }

            state.loading.set(false);
        });
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    provide_context(DashboardState::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::snapshot::PlayerStats;

    #[test]
    fn test_time_range_keys() {
        assert_eq!(TimeRange::Quarter(1).key(), "q1");
        assert_eq!(TimeRange::Half.key(), "half");
        assert_eq!(TimeRange::Game.key(), "game");
        assert_eq!(TimeRange::default(), TimeRange::Game);
    }

    #[test]
    fn test_time_range_labels() {
        assert_eq!(TimeRange::Quarter(3).label(), "Q3");
        assert_eq!(TimeRange::Half.label(), "1st Half");
        assert_eq!(TimeRange::ALL.len(), 6);
    }

    #[test]
    fn test_select_point_records_exact_coordinate() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        state.select_point(CourtPoint { x: 250.0, y: 20.0 });

        assert_eq!(
            state.selected_point.get_untracked(),
            Some(CourtPoint { x: 250.0, y: 20.0 })
        );
        // A new click invalidates the previous prediction
        assert_eq!(state.prediction.get_untracked(), None);

        runtime.dispose();
    }

    #[test]
    fn test_apply_update_merges_in_order() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        for points in [4u32, 9] {
            state.apply_update(SnapshotUpdate {
                player_stats: Some(PlayerStats {
                    points,
                    ..Default::default()
                }),
                ..Default::default()
            });
        }

        assert_eq!(state.game_data.get_untracked().player_stats.points, 9);

        runtime.dispose();
    }

    #[test]
    fn test_toggle_defenders_round_trip() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        assert!(state.show_defenders.get_untracked());
        state.toggle_defenders();
        assert!(!state.show_defenders.get_untracked());
        state.toggle_defenders();
        assert!(state.show_defenders.get_untracked());

        runtime.dispose();
    }
}
