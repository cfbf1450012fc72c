//! Game State and Live Feed
//!
//! - [`snapshot`]: the snapshot data model and shallow-merge semantics
//! - [`store`]: shared in-memory holder of the current snapshot
//! - [`feed`]: simulated live feed producing partial updates

pub mod feed;
pub mod snapshot;
pub mod store;

pub use feed::{spawn_feed, GameFeed};
pub use snapshot::{
    Defender, GameSnapshot, HeatPoint, PerformanceSample, Player, PlayerStats, SnapshotUpdate,
};
pub use store::GameStore;

/// Court diagram width in pixels (50 ft at 10 px/ft).
pub const COURT_WIDTH: f64 = 500.0;

/// Court diagram height in pixels (47 ft half court at 10 px/ft).
pub const COURT_HEIGHT: f64 = 470.0;

/// Basket center, x.
pub const BASKET_X: f64 = 250.0;

/// Basket center, y (4.75 ft from the baseline).
pub const BASKET_Y: f64 = 47.5;
