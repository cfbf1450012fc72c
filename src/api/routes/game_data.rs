//! Game Data Route
//!
//! `GET /api/game-data` returns the full current snapshot. The dashboard's
//! player and time-range filters arrive as query parameters and narrow the
//! performance series; the spatial overlays are always the live picture.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::game::GameSnapshot;

/// Query parameters for `GET /api/game-data`.
#[derive(Debug, Default, Deserialize)]
pub struct GameDataQuery {
    /// Selected player id, validated against the roster
    pub player: Option<String>,
    /// Time-range key: "q1".."q4", "half", or "game" (default)
    pub range: Option<String>,
}

/// GET /api/game-data
pub async fn get_game_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GameDataQuery>,
) -> ApiResult<Json<GameSnapshot>> {
    let mut snapshot = state.store.snapshot().await;

    if let Some(player) = &query.player {
        if !snapshot.players.iter().any(|p| &p.id == player) {
            return Err(ApiError::NotFound(format!("player {}", player)));
        }
    }

    if let Some(range) = &query.range {
        snapshot.performance_data = filter_performance(snapshot.performance_data, range)?;
    }

    Ok(Json(snapshot))
}

/// Keep only samples whose ordinal `time` key falls inside the range.
fn filter_performance(
    samples: Vec<crate::game::PerformanceSample>,
    range: &str,
) -> ApiResult<Vec<crate::game::PerformanceSample>> {
    let quarters: &[&str] = match range {
        "q1" => &["Q1"],
        "q2" => &["Q2"],
        "q3" => &["Q3"],
        "q4" => &["Q4"],
        "half" => &["Q1", "Q2"],
        "game" => return Ok(samples),
        other => {
            return Err(ApiError::Validation(format!(
                "unknown range '{}' (expected q1-q4, half, or game)",
                other
            )))
        }
    };

    Ok(samples
        .into_iter()
        .filter(|s| quarters.iter().any(|q| s.time.starts_with(q)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PerformanceSample;

    fn sample(time: &str) -> PerformanceSample {
        PerformanceSample {
            time: time.to_string(),
            fg_percentage: 50.0,
            hot_hand_index: 1.0,
        }
    }

    #[test]
    fn test_filter_performance_by_quarter() {
        let samples = vec![sample("Q1 10:00"), sample("Q2 08:30"), sample("Q3 05:00")];

        let filtered = filter_performance(samples.clone(), "q2").unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].time, "Q2 08:30");

        let half = filter_performance(samples.clone(), "half").unwrap();
        assert_eq!(half.len(), 2);

        let game = filter_performance(samples, "game").unwrap();
        assert_eq!(game.len(), 3);
    }

    #[test]
    fn test_filter_performance_rejects_unknown_range() {
        let result = filter_performance(vec![sample("Q1 10:00")], "playoffs");
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
