//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.
//! On connect the client immediately receives the full current snapshot as
//! its first frame, then partial updates as the feed publishes them.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::{ConnectionHub, Frame};
use crate::api::AppState;

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hub = Arc::clone(&state.ws_hub);
    let initial = state.store.snapshot().await;
    let initial_frame: Option<Frame> = serde_json::to_string(&initial)
        .ok()
        .map(|json| Arc::from(json.as_str()));

    ws.on_upgrade(move |socket| handle_socket(socket, hub, initial_frame))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, hub: Arc<ConnectionHub>, initial_frame: Option<Frame>) {
    let (mut sender, mut receiver) = socket.split();

    // Channel carrying outbound frames for this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<Frame>();

    let connection_id = match hub.register(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register WebSocket connection");
            let _ = sender.send(Message::Close(None)).await;
            return;
        }
    };

    // The full snapshot is itself a valid merge frame (every key present)
    if let Some(frame) = initial_frame {
        if sender
            .send(Message::Text(frame.to_string()))
            .await
            .is_err()
        {
            tracing::debug!(connection_id = %connection_id, "Failed to send initial snapshot");
            hub.unregister(&connection_id).await;
            return;
        }
    }

    let conn_id_for_send = connection_id.clone();

    // Task to forward frames from the hub channel to the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.to_string())).await.is_err() {
                tracing::debug!(
                    connection_id = %conn_id_for_send,
                    "WebSocket send failed, closing connection"
                );
                break;
            }
        }
    });

    let conn_id_for_recv = connection_id.clone();

    // Task to drain the client side. The stream is one-directional; client
    // text is logged and ignored rather than treated as a protocol error.
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Close(_)) => {
                    tracing::debug!(connection_id = %conn_id_for_recv, "Client requested close");
                    break;
                }
                Ok(Message::Text(text)) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        text = %text,
                        "Ignoring client message on one-way stream"
                    );
                }
                Ok(_) => {
                    // Ping/pong handled by axum, binary ignored
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for either direction to finish, then tear down both
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    hub.unregister(&connection_id).await;
}
