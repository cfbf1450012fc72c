//! WebSocket Connection Hub
//!
//! Tracks all connected dashboard clients and fans snapshot updates out to
//! them. Every client receives every update, so there is no topic layer;
//! frames are serialized once and shared.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::game::SnapshotUpdate;

/// Unique identifier for a WebSocket connection
pub type ConnectionId = String;

/// Pre-serialized JSON frame sent to clients.
pub type Frame = Arc<str>;

/// Manages all WebSocket connections and update fan-out.
pub struct ConnectionHub {
    /// Active connections: ConnectionId → sender of outbound frames
    connections: RwLock<HashMap<ConnectionId, mpsc::UnboundedSender<Frame>>>,
    /// Configuration
    config: HubConfig,
}

/// Configuration for the connection hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent connections
    pub max_connections: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_connections: 1000,
        }
    }
}

impl ConnectionHub {
    /// Create a new connection hub
    pub fn new(config: HubConfig) -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Register a new WebSocket connection
    ///
    /// Returns the connection ID on success, or an error if the connection
    /// limit has been reached.
    pub async fn register(
        &self,
        sender: mpsc::UnboundedSender<Frame>,
    ) -> Result<ConnectionId, HubError> {
        let mut connections = self.connections.write().await;
        if connections.len() >= self.config.max_connections {
            return Err(HubError::TooManyConnections(self.config.max_connections));
        }

        let id = Uuid::new_v4().to_string();
        connections.insert(id.clone(), sender);

        tracing::info!(connection_id = %id, "WebSocket connected");
        Ok(id)
    }

    /// Unregister a connection
    pub async fn unregister(&self, id: &str) {
        self.connections.write().await.remove(id);
        tracing::info!(connection_id = %id, "WebSocket disconnected");
    }

    /// Broadcast a partial snapshot update to every connected client.
    ///
    /// The frame is the bare update object, so its top-level keys are a
    /// subset of the snapshot's keys. Send failures are left for the
    /// connection tasks to notice and clean up.
    pub async fn broadcast_update(&self, update: &SnapshotUpdate) {
        let frame: Frame = match serde_json::to_string(update) {
            Ok(json) => Arc::from(json.as_str()),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize snapshot update");
                return;
            }
        };
        self.broadcast_frame(frame).await;
    }

    /// Broadcast a raw frame to every connected client.
    pub async fn broadcast_frame(&self, frame: Frame) {
        let connections = self.connections.read().await;

        let mut sent = 0;
        for sender in connections.values() {
            if sender.send(Arc::clone(&frame)).is_ok() {
                sent += 1;
            }
        }

        if sent > 0 {
            tracing::trace!(clients = sent, "Broadcast update");
        }
    }

    /// Send a frame to one connection.
    pub async fn send_to(&self, id: &str, frame: Frame) -> Result<(), HubError> {
        let connections = self.connections.read().await;
        let sender = connections.get(id).ok_or(HubError::ConnectionNotFound)?;

        sender.send(frame).map_err(|_| HubError::SendFailed)
    }

    /// Get the current connection count
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }
}

impl Default for ConnectionHub {
    fn default() -> Self {
        Self::new(HubConfig::default())
    }
}

/// Errors that can occur in the connection hub
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Too many connections (limit: {0})")]
    TooManyConnections(usize),

    #[error("Connection not found")]
    ConnectionNotFound,

    #[error("Failed to send message")]
    SendFailed,
}
