//! # CourtVision
//!
//! Real-Time Basketball Shot Analytics - the Rust backend behind the
//! CourtVision dashboard. Serves the game-data snapshot over REST, streams
//! incremental updates over WebSocket, and answers shot-probability queries
//! for clicked court points.
//!
//! ## Modules
//!
//! - [`game`]: snapshot model, shared store, and the simulated live feed
//! - [`predict`]: placeholder shot-probability model
//! - [`websocket`]: connection hub and update streaming
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtvision::api::{serve, AppState};
//! use courtvision::config::Config;
//! use courtvision::game::{spawn_feed, GameFeed, GameStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     let mut feed = GameFeed::new(config.feed.seed);
//!     let store = Arc::new(GameStore::new(feed.initial_snapshot()));
//!
//!     let state = AppState::new(Arc::clone(&store), config.server.clone());
//!     spawn_feed(store, Arc::clone(&state.ws_hub), config.feed.clone());
//!
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod game;
pub mod predict;
pub mod websocket;

// Re-export top-level types for convenience
pub use game::{
    Defender, GameFeed, GameSnapshot, GameStore, HeatPoint, PerformanceSample, Player,
    PlayerStats, SnapshotUpdate,
};

pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use predict::{PredictRequest, PredictResponse};

pub use websocket::{websocket_handler, ConnectionHub, HubConfig, HubError};

pub use config::{Config, ConfigError, FeedConfig, LoggingConfig, ServerConfig};
