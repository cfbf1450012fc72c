//! WebSocket Stream Client
//!
//! Connects to the backend stream, shallow-merges every inbound frame into
//! the dashboard snapshot, and reconnects with exponential backoff when the
//! socket drops. Frames are bare JSON objects whose keys are a subset of the
//! snapshot's keys; the first frame after connect is the full snapshot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::global::DashboardState;
use super::snapshot::SnapshotUpdate;

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const MAX_BACKOFF_MS: u32 = 30_000;

/// Parse one inbound frame into a snapshot update.
///
/// Unknown keys are ignored; absent keys stay untouched on merge.
pub fn parse_frame(text: &str) -> Result<SnapshotUpdate, serde_json::Error> {
    serde_json::from_str(text)
}

/// Backoff before reconnect attempt `attempts` (0-based), in milliseconds.
pub fn backoff_ms(attempts: u32) -> u32 {
    (1000u32.saturating_mul(2u32.saturating_pow(attempts))).min(MAX_BACKOFF_MS)
}

/// Rewrite an HTTP API base into the matching stream URL.
pub fn stream_url(api_base: &str) -> String {
    let base = api_base.trim_end_matches('/');
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        format!("ws://{}", base)
    };
    format!("{}/ws", ws_base)
}

/// Live stream connection with automatic reconnect.
///
/// `close()` is terminal: it marks the client closed, cancels any pending
/// reconnect timer, and makes later `connect()` calls no-ops, so a backoff
/// timer that outlives the component cannot reopen the stream.
pub struct StreamClient {
    socket: RefCell<Option<WebSocket>>,
    state: DashboardState,
    url: String,
    reconnect_attempts: Cell<u32>,
    closed: Cell<bool>,
    pending_reconnect: RefCell<Option<gloo_timers::callback::Timeout>>,
}

impl StreamClient {
    pub fn new(state: DashboardState, url: String) -> Rc<Self> {
        Rc::new(Self {
            socket: RefCell::new(None),
            state,
            url,
            reconnect_attempts: Cell::new(0),
            closed: Cell::new(false),
            pending_reconnect: RefCell::new(None),
        })
    }

    /// Open the socket and install the event handlers.
    pub fn connect(self: &Rc<Self>) {
        if self.closed.get() {
            return;
        }

        let ws = match WebSocket::new(&self.url) {
            Ok(ws) => ws,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("WebSocket connect failed: {:?}", e).into(),
                );
                self.schedule_reconnect();
                return;
            }
        };

        let client = Rc::clone(self);
        let onopen = Closure::<dyn FnMut()>::new(move || {
            client.state.ws_connected.set(true);
            client.reconnect_attempts.set(0);
        });
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let state = self.state.clone();
        let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            if let Some(text) = event.data().as_string() {
                match parse_frame(&text) {
                    Ok(update) => {
                        state.apply_update(update);
                        state
                            .last_update
                            .set(Some(chrono::Utc::now().timestamp_millis()));
                    }
                    Err(e) => {
                        web_sys::console::warn_1(
                            &format!("Ignoring malformed frame: {}", e).into(),
                        );
                    }
                }
            }
        });
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        let client = Rc::clone(self);
        let onclose = Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
            client.state.ws_connected.set(false);
            if !client.closed.get() {
                web_sys::console::log_1(
                    &format!("Stream closed (code {}), reconnecting", event.code()).into(),
                );
                client.schedule_reconnect();
            }
        });
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();

        *self.socket.borrow_mut() = Some(ws);
    }

    fn schedule_reconnect(self: &Rc<Self>) {
        if self.closed.get() {
            return;
        }

        let attempts = self.reconnect_attempts.get();
        if attempts >= MAX_RECONNECT_ATTEMPTS {
            self.state
                .show_error("Live stream lost. Refresh the page to reconnect.");
            return;
        }
        self.reconnect_attempts.set(attempts + 1);

        let client = Rc::clone(self);
        // Held, not forgotten, so close() can cancel it by dropping
        let timeout = gloo_timers::callback::Timeout::new(backoff_ms(attempts), move || {
            // Already fired; forget instead of dropping the running closure
            if let Some(t) = client.pending_reconnect.borrow_mut().take() {
                t.forget();
            }
            client.connect();
        });
        *self.pending_reconnect.borrow_mut() = Some(timeout);
    }

    /// Close the stream for good. Idempotent; cancels any pending reconnect
    /// and makes later `connect()` calls no-ops.
    pub fn close(&self) {
        self.closed.set(true);
        self.pending_reconnect.borrow_mut().take();
        if let Some(ws) = self.socket.borrow_mut().take() {
            let _ = ws.close();
        }
        self.state.ws_connected.set(false);
    }
}

/// Connect the live stream and tie its lifetime to the current scope.
pub fn init_stream(state: DashboardState, api_base: &str) {
    let client = StreamClient::new(state, stream_url(api_base));
    client.connect();

    on_cleanup(move || client.close());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_subset_keys() {
        let update = parse_frame(r#"{"playerStats": {"points": 31}}"#).unwrap();
        let stats = update.player_stats.unwrap();
        assert_eq!(stats.points, 31);
        assert!(update.players.is_none());
        assert!(update.heatmap_data.is_none());
    }

    #[test]
    fn test_parse_frame_full_snapshot_is_valid_update() {
        // The first frame after connect carries every key
        let update = parse_frame(
            r#"{
                "players": [],
                "heatmapData": [{"x": 1.0, "y": 2.0, "probability": 0.5}],
                "defensiveData": [],
                "performanceData": [],
                "playerStats": {"fg_percentage": 48, "points": 12, "hot_hand_index": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(update.heatmap_data.unwrap().len(), 1);
        assert_eq!(update.player_stats.unwrap().fg_percentage, 48.0);
    }

    #[test]
    fn test_parse_frame_rejects_garbage() {
        assert!(parse_frame("not json").is_err());
        assert!(parse_frame(r#"[1, 2, 3]"#).is_err());
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        assert_eq!(backoff_ms(0), 1000);
        assert_eq!(backoff_ms(1), 2000);
        assert_eq!(backoff_ms(4), 16_000);
        assert_eq!(backoff_ms(10), 30_000);
    }

    #[test]
    fn test_close_is_idempotent() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        let client = StreamClient::new(state.clone(), "ws://localhost:8082/ws".to_string());

        client.close();
        client.close();

        assert!(client.closed.get());
        assert!(client.socket.borrow().is_none());
        assert!(!state.ws_connected.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_connect_after_close_is_a_noop() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        let client = StreamClient::new(state, "ws://localhost:8082/ws".to_string());

        // A backoff timer firing after teardown lands here; it must not
        // reopen the stream
        client.close();
        client.connect();

        assert!(client.socket.borrow().is_none());
        assert!(client.pending_reconnect.borrow().is_none());

        runtime.dispose();
    }

    #[test]
    fn test_stream_url_rewrites_scheme() {
        assert_eq!(stream_url("http://localhost:8082"), "ws://localhost:8082/ws");
        assert_eq!(
            stream_url("https://court.example.com/"),
            "wss://court.example.com/ws"
        );
    }
}
