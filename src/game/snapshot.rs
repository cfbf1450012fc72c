//! Game Snapshot Model
//!
//! The full in-memory representation of the analytics data shown by the
//! dashboard, plus the partial-update type streamed over WebSocket.
//!
//! Wire format matches the dashboard contract: top-level snapshot keys are
//! camelCase (`heatmapData`, `defensiveData`, ...) while stat fields keep
//! their upstream snake_case names (`fg_percentage`, `hot_hand_index`).

use serde::{Deserialize, Serialize};

/// Complete game/analytics state served by `GET /api/game-data`.
///
/// Every field defaults to empty so a partial payload never faults a
/// consumer. Replaced wholesale on fetch, shallow-merged on streamed update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameSnapshot {
    pub players: Vec<Player>,
    pub heatmap_data: Vec<HeatPoint>,
    pub defensive_data: Vec<Defender>,
    pub performance_data: Vec<PerformanceSample>,
    pub player_stats: PlayerStats,
}

/// A selectable player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: String,
    pub name: String,
}

/// A court coordinate with an associated shot-success probability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatPoint {
    /// Court-pixel x coordinate (0..=500)
    pub x: f64,
    /// Court-pixel y coordinate (0..=470, baseline at 0)
    pub y: f64,
    /// Shot-success probability in [0, 1]
    pub probability: f64,
}

/// An opposing player's position and motion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Defender {
    pub x: f64,
    pub y: f64,
    /// Pixel units per frame, signed
    pub velocity_x: f64,
    pub velocity_y: f64,
}

/// Headline stats for the selected player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    /// Field-goal percentage in [0, 100]
    pub fg_percentage: f64,
    pub points: u32,
    pub hot_hand_index: f64,
}

/// One point of the performance time series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSample {
    /// Ordinal x-axis key, e.g. "Q1 10:30"
    pub time: String,
    pub fg_percentage: f64,
    pub hot_hand_index: f64,
}

/// Partial snapshot streamed over the WebSocket feed.
///
/// Serializes to a JSON object whose top-level keys are a subset of
/// [`GameSnapshot`]'s keys. A present key wholly replaces the snapshot's
/// value for that key; absent keys leave the snapshot untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapshotUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap_data: Option<Vec<HeatPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defensive_data: Option<Vec<Defender>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_data: Option<Vec<PerformanceSample>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_stats: Option<PlayerStats>,
}

impl SnapshotUpdate {
    /// True when no key is present (nothing to merge).
    pub fn is_empty(&self) -> bool {
        self.players.is_none()
            && self.heatmap_data.is_none()
            && self.defensive_data.is_none()
            && self.performance_data.is_none()
            && self.player_stats.is_none()
    }
}

impl GameSnapshot {
    /// Shallow-merge a partial update into this snapshot.
    ///
    /// Later sequences entirely replace earlier ones for the same key; there
    /// is no element-wise reconciliation. Updates must be applied in arrival
    /// order.
    pub fn apply(&mut self, update: SnapshotUpdate) {
        if let Some(players) = update.players {
            self.players = players;
        }
        if let Some(heatmap) = update.heatmap_data {
            self.heatmap_data = heatmap;
        }
        if let Some(defenders) = update.defensive_data {
            self.defensive_data = defenders;
        }
        if let Some(performance) = update.performance_data {
            self.performance_data = performance;
        }
        if let Some(stats) = update.player_stats {
            self.player_stats = stats;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> GameSnapshot {
        GameSnapshot {
            players: vec![Player {
                id: "p1".to_string(),
                name: "Test Player".to_string(),
            }],
            heatmap_data: vec![HeatPoint {
                x: 250.0,
                y: 100.0,
                probability: 0.42,
            }],
            defensive_data: vec![Defender {
                x: 100.0,
                y: 100.0,
                velocity_x: 2.0,
                velocity_y: -1.0,
            }],
            performance_data: vec![PerformanceSample {
                time: "Q1 11:30".to_string(),
                fg_percentage: 48.0,
                hot_hand_index: 1.2,
            }],
            player_stats: PlayerStats {
                fg_percentage: 48.0,
                points: 12,
                hot_hand_index: 1.2,
            },
        }
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = GameSnapshot::default();
        assert!(snapshot.players.is_empty());
        assert!(snapshot.heatmap_data.is_empty());
        assert!(snapshot.defensive_data.is_empty());
        assert!(snapshot.performance_data.is_empty());
        assert_eq!(snapshot.player_stats, PlayerStats::default());
    }

    #[test]
    fn test_apply_replaces_only_present_keys() {
        let mut snapshot = sample_snapshot();
        let before_heatmap = snapshot.heatmap_data.clone();

        let update = SnapshotUpdate {
            player_stats: Some(PlayerStats {
                fg_percentage: 55.0,
                points: 20,
                hot_hand_index: 3.0,
            }),
            ..Default::default()
        };
        snapshot.apply(update);

        assert_eq!(snapshot.player_stats.fg_percentage, 55.0);
        assert_eq!(snapshot.player_stats.points, 20);
        assert_eq!(snapshot.player_stats.hot_hand_index, 3.0);
        // Merge is shallow, per top-level key: everything else untouched
        assert_eq!(snapshot.heatmap_data, before_heatmap);
        assert_eq!(snapshot.players.len(), 1);
    }

    #[test]
    fn test_apply_replaces_sequences_wholesale() {
        let mut snapshot = sample_snapshot();

        let update = SnapshotUpdate {
            heatmap_data: Some(vec![
                HeatPoint {
                    x: 30.0,
                    y: 30.0,
                    probability: 0.6,
                },
                HeatPoint {
                    x: 470.0,
                    y: 30.0,
                    probability: 0.3,
                },
            ]),
            ..Default::default()
        };
        snapshot.apply(update);

        // Later full sequences entirely replace earlier ones, no append
        assert_eq!(snapshot.heatmap_data.len(), 2);
        assert_eq!(snapshot.heatmap_data[0].probability, 0.6);
    }

    #[test]
    fn test_apply_empty_update_is_noop() {
        let mut snapshot = sample_snapshot();
        let before = snapshot.clone();

        let update = SnapshotUpdate::default();
        assert!(update.is_empty());
        snapshot.apply(update);

        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_update_serializes_only_present_keys() {
        let update = SnapshotUpdate {
            player_stats: Some(PlayerStats {
                fg_percentage: 55.0,
                points: 20,
                hot_hand_index: 3.0,
            }),
            ..Default::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"playerStats\""));
        assert!(!json.contains("heatmapData"));
        assert!(!json.contains("defensiveData"));
    }

    #[test]
    fn test_snapshot_wire_keys_are_camel_case() {
        let json = serde_json::to_string(&sample_snapshot()).unwrap();
        assert!(json.contains("\"heatmapData\""));
        assert!(json.contains("\"defensiveData\""));
        assert!(json.contains("\"performanceData\""));
        assert!(json.contains("\"playerStats\""));
        assert!(json.contains("\"velocityX\""));
        assert!(json.contains("\"fg_percentage\""));
    }

    #[test]
    fn test_snapshot_tolerates_partial_json() {
        // Body with most keys missing must still deserialize
        let snapshot: GameSnapshot =
            serde_json::from_str(r#"{"heatmapData": [{"x": 1.0, "y": 2.0}]}"#).unwrap();
        assert_eq!(snapshot.heatmap_data.len(), 1);
        assert_eq!(snapshot.heatmap_data[0].probability, 0.0);
        assert!(snapshot.players.is_empty());
    }
}
