//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::game::GameStore;
use crate::websocket::{ConnectionHub, HubConfig};

/// Shared application state for all handlers
pub struct AppState {
    /// Current game snapshot
    pub store: Arc<GameStore>,
    /// WebSocket connection hub for real-time streaming
    pub ws_hub: Arc<ConnectionHub>,
    /// Server configuration
    pub config: ServerConfig,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with a default hub
    pub fn new(store: Arc<GameStore>, config: ServerConfig) -> Self {
        Self {
            store,
            ws_hub: Arc::new(ConnectionHub::new(HubConfig::default())),
            config,
            start_time: Instant::now(),
        }
    }

    /// Create AppState with custom WebSocket hub configuration
    pub fn with_ws_config(
        store: Arc<GameStore>,
        config: ServerConfig,
        hub_config: HubConfig,
    ) -> Self {
        Self {
            store,
            ws_hub: Arc::new(ConnectionHub::new(hub_config)),
            config,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get WebSocket connection count
    pub async fn ws_connection_count(&self) -> usize {
        self.ws_hub.connection_count().await
    }
}
