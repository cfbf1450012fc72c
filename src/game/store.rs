//! Game Store
//!
//! Single shared holder of the current [`GameSnapshot`]. All mutation goes
//! through [`GameStore::apply`], so streamed updates are merged one at a
//! time in arrival order.

use tokio::sync::RwLock;

use super::snapshot::{GameSnapshot, SnapshotUpdate};

/// Shared in-memory snapshot state.
pub struct GameStore {
    snapshot: RwLock<GameSnapshot>,
}

impl GameStore {
    /// Create a store seeded with an initial snapshot.
    pub fn new(initial: GameSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(initial),
        }
    }

    /// Clone out the current snapshot.
    pub async fn snapshot(&self) -> GameSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Shallow-merge a partial update into the current snapshot.
    pub async fn apply(&self, update: SnapshotUpdate) {
        self.snapshot.write().await.apply(update);
    }

    /// Replace the snapshot wholesale.
    pub async fn replace(&self, snapshot: GameSnapshot) {
        *self.snapshot.write().await = snapshot;
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(GameSnapshot::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::snapshot::PlayerStats;

    #[tokio::test]
    async fn test_apply_merges_into_snapshot() {
        let store = GameStore::default();

        store
            .apply(SnapshotUpdate {
                player_stats: Some(PlayerStats {
                    fg_percentage: 51.0,
                    points: 18,
                    hot_hand_index: 2.4,
                }),
                ..Default::default()
            })
            .await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.player_stats.points, 18);
        assert!(snapshot.heatmap_data.is_empty());
    }

    #[tokio::test]
    async fn test_updates_apply_in_order() {
        let store = GameStore::default();

        for points in [5u32, 9, 14] {
            store
                .apply(SnapshotUpdate {
                    player_stats: Some(PlayerStats {
                        points,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .await;
        }

        // Last write wins: later messages fully replace the key
        assert_eq!(store.snapshot().await.player_stats.points, 14);
    }

    #[tokio::test]
    async fn test_snapshot_returns_clone() {
        let store = GameStore::default();
        let mut copy = store.snapshot().await;
        copy.player_stats.points = 99;

        assert_eq!(store.snapshot().await.player_stats.points, 0);
    }
}
