//! Snapshot Data Model
//!
//! Client-side mirror of the server's snapshot types and shallow-merge
//! semantics. Every field defaults so a partial or missing payload never
//! faults a render; no web APIs in here, so the merge logic is testable
//! off-wasm.

use serde::{Deserialize, Serialize};

/// Complete dashboard data, fetched from `GET /api/game-data`.
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

/// A court coordinate with a shot-success probability in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatPoint {
    pub x: f64,
    pub y: f64,
    pub probability: f64,
}

/// An opposing player's position and motion (pixel units per frame).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Defender {
    pub x: f64,
    pub y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
}

/// Headline stats for the selected player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub fg_percentage: f64,
    pub points: u32,
    pub hot_hand_index: f64,
}

/// One point of the performance time series, keyed by an ordinal label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSample {
    pub time: String,
    pub fg_percentage: f64,
    pub hot_hand_index: f64,
}

/// Partial snapshot received over the WebSocket stream.
///
/// A JSON object whose top-level keys are a subset of [`GameSnapshot`]'s
/// keys. Present keys wholly replace the current value; absent keys leave
/// it untouched.
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

impl GameSnapshot {
    /// Shallow-merge a streamed update into this snapshot, key by key.
    /// Updates must be applied in arrival order; last write wins per key.
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

    #[test]
    fn test_defaults_are_empty() {
        let snapshot = GameSnapshot::default();
        assert!(snapshot.heatmap_data.is_empty());
        assert!(snapshot.defensive_data.is_empty());
        assert!(snapshot.performance_data.is_empty());
        assert_eq!(snapshot.player_stats.points, 0);
    }

    #[test]
    fn test_streamed_stats_replace_only_that_key() {
        let mut snapshot = GameSnapshot {
            heatmap_data: vec![HeatPoint {
                x: 100.0,
                y: 50.0,
                probability: 0.5,
            }],
            player_stats: PlayerStats {
                fg_percentage: 44.0,
                points: 8,
                hot_hand_index: 0.5,
            },
            ..Default::default()
        };
        let heatmap_before = snapshot.heatmap_data.clone();

        let update: SnapshotUpdate = serde_json::from_str(
            r#"{"playerStats": {"fg_percentage": 55, "points": 20, "hot_hand_index": 3}}"#,
        )
        .unwrap();
        snapshot.apply(update);

        assert_eq!(snapshot.player_stats.fg_percentage, 55.0);
        assert_eq!(snapshot.player_stats.points, 20);
        assert_eq!(snapshot.player_stats.hot_hand_index, 3.0);
        assert_eq!(snapshot.heatmap_data, heatmap_before);
    }

    #[test]
    fn test_sequences_replace_wholesale() {
        let mut snapshot = GameSnapshot::default();
        snapshot.apply(SnapshotUpdate {
            defensive_data: Some(vec![Defender::default(); 5]),
            ..Default::default()
        });
        snapshot.apply(SnapshotUpdate {
            defensive_data: Some(vec![Defender::default(); 2]),
            ..Default::default()
        });

        assert_eq!(snapshot.defensive_data.len(), 2);
    }

    #[test]
    fn test_partial_fetch_body_deserializes() {
        // Server omitting keys must not fault the client
        let snapshot: GameSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, GameSnapshot::default());
    }
}
