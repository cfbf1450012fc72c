//! WebSocket Real-Time Streaming
//!
//! Streams live snapshot updates to dashboard clients.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: tracks active connections and fans frames out
//! - **Handler**: handles WebSocket upgrade and the connection lifecycle
//!
//! ## Protocol
//!
//! Clients connect to `/ws`. The first frame is the full current snapshot;
//! every later frame is a JSON object whose top-level keys are a subset of
//! the snapshot's keys, to be shallow-merged by the client in arrival order.
//! The stream is one-directional: client frames are ignored.
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8082/ws');
//!
//! ws.onmessage = (event) => {
//!   const update = JSON.parse(event.data);
//!   Object.assign(gameData, update);
//! };
//! ```

mod handler;
mod hub;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, Frame, HubConfig, HubError};
