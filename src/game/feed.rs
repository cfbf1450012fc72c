//! Simulated Live Feed
//!
//! Stands in for the tracking-data provider: a background task that drifts
//! defender positions, reshuffles shot probabilities, and accrues player
//! stats, publishing each tick as a partial [`SnapshotUpdate`] to the
//! WebSocket hub after merging it into the store.
//!
//! Deterministic when seeded, which is what the tests rely on.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;

use super::snapshot::{
    Defender, GameSnapshot, HeatPoint, PerformanceSample, Player, PlayerStats, SnapshotUpdate,
};
use super::store::GameStore;
use super::{COURT_HEIGHT, COURT_WIDTH};
use crate::config::FeedConfig;
use crate::predict;
use crate::websocket::ConnectionHub;

/// Seconds of game clock consumed per feed tick.
const CLOCK_STEP_SECS: u32 = 2;

/// Ticks between heatmap refreshes.
const HEATMAP_EVERY: u64 = 3;

/// Ticks between stat/performance updates.
const STATS_EVERY: u64 = 5;

/// Performance series length cap.
const MAX_PERFORMANCE_SAMPLES: usize = 48;

/// Deterministic generator of game snapshots and incremental updates.
pub struct GameFeed {
    rng: StdRng,
    tick: u64,
    quarter: u8,
    clock_secs: u32,
}

impl GameFeed {
    /// Create a feed. A seed makes the whole tick stream reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            tick: 0,
            quarter: 1,
            clock_secs: 12 * 60,
        }
    }

    /// Generate the opening snapshot.
    pub fn initial_snapshot(&mut self) -> GameSnapshot {
        let players = vec![
            ("p1", "D. Carter"),
            ("p2", "M. Okafor"),
            ("p3", "J. Reyes"),
            ("p4", "T. Lindqvist"),
            ("p5", "A. Brooks"),
        ]
        .into_iter()
        .map(|(id, name)| Player {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

        let stats = PlayerStats {
            fg_percentage: 45.0,
            points: 0,
            hot_hand_index: 1.0,
        };

        GameSnapshot {
            players,
            heatmap_data: self.generate_heatmap(),
            defensive_data: self.generate_defenders(),
            performance_data: vec![PerformanceSample {
                time: self.clock_label(),
                fg_percentage: stats.fg_percentage,
                hot_hand_index: stats.hot_hand_index,
            }],
            player_stats: stats,
        }
    }

    /// Produce the next partial update given the current snapshot.
    ///
    /// Defenders move every tick; heatmap and stats refresh on their own
    /// cadences so consecutive frames carry different key subsets.
    pub fn next_update(&mut self, current: &GameSnapshot) -> SnapshotUpdate {
        self.tick += 1;
        self.advance_clock();

        let mut update = SnapshotUpdate {
            defensive_data: Some(self.advance_defenders(&current.defensive_data)),
            ..Default::default()
        };

        if self.tick % HEATMAP_EVERY == 0 {
            update.heatmap_data = Some(self.jitter_heatmap(&current.heatmap_data));
        }

        if self.tick % STATS_EVERY == 0 {
            let stats = self.advance_stats(&current.player_stats);
            let mut performance = current.performance_data.clone();
            performance.push(PerformanceSample {
                time: self.clock_label(),
                fg_percentage: stats.fg_percentage,
                hot_hand_index: stats.hot_hand_index,
            });
            if performance.len() > MAX_PERFORMANCE_SAMPLES {
                let excess = performance.len() - MAX_PERFORMANCE_SAMPLES;
                performance.drain(..excess);
            }
            update.performance_data = Some(performance);
            update.player_stats = Some(stats);
        }

        update
    }

    /// Current game-clock label, e.g. "Q1 11:58".
    pub fn clock_label(&self) -> String {
        format!(
            "Q{} {}:{:02}",
            self.quarter,
            self.clock_secs / 60,
            self.clock_secs % 60
        )
    }

    fn advance_clock(&mut self) {
        if self.clock_secs > CLOCK_STEP_SECS {
            self.clock_secs -= CLOCK_STEP_SECS;
        } else if self.quarter < 4 {
            self.quarter += 1;
            self.clock_secs = 12 * 60;
        } else {
            self.clock_secs = 0;
        }
    }

    fn generate_heatmap(&mut self) -> Vec<HeatPoint> {
        (0..40)
            .map(|_| {
                let x = self.rng.gen_range(30.0..COURT_WIDTH - 30.0);
                let y = self.rng.gen_range(20.0..300.0);
                let modeled = predict::shot_probability(x, y);
                let jitter: f64 = self.rng.gen_range(-0.08..0.08);
                HeatPoint {
                    x,
                    y,
                    probability: (modeled + jitter).clamp(0.05, 0.95),
                }
            })
            .collect()
    }

    fn generate_defenders(&mut self) -> Vec<Defender> {
        (0..5)
            .map(|_| Defender {
                x: self.rng.gen_range(60.0..COURT_WIDTH - 60.0),
                y: self.rng.gen_range(40.0..280.0),
                velocity_x: self.rng.gen_range(-2.0..2.0),
                velocity_y: self.rng.gen_range(-2.0..2.0),
            })
            .collect()
    }

    /// Move each defender by its velocity, bouncing off the court edges,
    /// then nudge the velocity so motion stays lively.
    fn advance_defenders(&mut self, defenders: &[Defender]) -> Vec<Defender> {
        defenders
            .iter()
            .map(|d| {
                let mut x = d.x + d.velocity_x;
                let mut y = d.y + d.velocity_y;
                let mut vx = d.velocity_x;
                let mut vy = d.velocity_y;

                if x < 0.0 || x > COURT_WIDTH {
                    vx = -vx;
                    x = x.clamp(0.0, COURT_WIDTH);
                }
                if y < 0.0 || y > COURT_HEIGHT {
                    vy = -vy;
                    y = y.clamp(0.0, COURT_HEIGHT);
                }

                vx = (vx + self.rng.gen_range(-0.3..0.3)).clamp(-3.0, 3.0);
                vy = (vy + self.rng.gen_range(-0.3..0.3)).clamp(-3.0, 3.0);

                Defender {
                    x,
                    y,
                    velocity_x: vx,
                    velocity_y: vy,
                }
            })
            .collect()
    }

    fn jitter_heatmap(&mut self, heatmap: &[HeatPoint]) -> Vec<HeatPoint> {
        if heatmap.is_empty() {
            return self.generate_heatmap();
        }
        heatmap
            .iter()
            .map(|p| HeatPoint {
                x: p.x,
                y: p.y,
                probability: (p.probability + self.rng.gen_range(-0.05..0.05)).clamp(0.05, 0.95),
            })
            .collect()
    }

    fn advance_stats(&mut self, stats: &PlayerStats) -> PlayerStats {
        // Weighted possession outcome: miss, two, or three
        let points = match self.rng.gen_range(0..10) {
            0..=4 => 0,
            5..=8 => 2,
            _ => 3,
        };
        PlayerStats {
            fg_percentage: (stats.fg_percentage + self.rng.gen_range(-2.0..2.0)).clamp(0.0, 100.0),
            points: stats.points + points,
            hot_hand_index: (stats.hot_hand_index + self.rng.gen_range(-0.4..0.4))
                .clamp(-5.0, 5.0),
        }
    }
}

/// Spawn the feed loop: tick, merge into the store, broadcast to clients.
pub fn spawn_feed(
    store: Arc<GameStore>,
    hub: Arc<ConnectionHub>,
    config: FeedConfig,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut feed = GameFeed::new(config.seed);
        let tick = Duration::from_millis(config.tick_ms.max(100));
        let mut interval = tokio::time::interval(tick);
        // First tick of tokio's interval fires immediately; skip it so the
        // opening snapshot stays visible for a full period.
        interval.tick().await;

        tracing::info!(tick_ms = config.tick_ms, seed = ?config.seed, "Live feed started");

        loop {
            interval.tick().await;
            let current = store.snapshot().await;
            let update = feed.next_update(&current);
            store.apply(update.clone()).await;
            hub.broadcast_update(&update).await;
            tracing::trace!(tick = feed.tick, "Feed tick published");
        }
    })
}
