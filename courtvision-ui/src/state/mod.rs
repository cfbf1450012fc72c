//! Client-side state: the game snapshot, global signals, and the live stream.

pub mod global;
pub mod snapshot;
pub mod websocket;

pub use global::{provide_dashboard_state, CourtPoint, DashboardState, ShotPrediction, TimeRange};
pub use snapshot::{GameSnapshot, SnapshotUpdate};
