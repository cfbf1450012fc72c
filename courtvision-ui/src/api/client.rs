//! HTTP API Client
//!
//! Functions for communicating with the CourtVision REST API.

use gloo_net::http::Request;

use crate::state::global::ShotPrediction;
use crate::state::snapshot::GameSnapshot;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("courtvision_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[allow(dead_code)]
    #[serde(default)]
    code: String,
    message: String,
}

/// Extract the server's error message from a failed response, falling back
/// to the HTTP status when the body is not our error envelope.
async fn extract_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("Request failed with status {}", status),
    }
}

/// Build the game-data URL for the given player/range filters.
pub fn game_data_url(api_base: &str, player: Option<&str>, range: &str) -> String {
    let mut url = format!("{}/api/game-data?range={}", api_base, range);
    if let Some(player) = player {
        url.push_str(&format!("&player={}", player));
    }
    url
}

// ============ API Functions ============

/// Fetch the game snapshot, filtered by player and time range
pub async fn fetch_game_data(
    player: Option<&str>,
    range: &str,
) -> Result<GameSnapshot, String> {
    let api_base = get_api_base();

    let response = Request::get(&game_data_url(&api_base, player, range))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Request a shot prediction for a court coordinate
pub async fn fetch_prediction(x: f64, y: f64) -> Result<ShotPrediction, String> {
    #[derive(serde::Serialize)]
    struct PredictRequest {
        x: f64,
        y: f64,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/predict", api_base))
        .json(&PredictRequest { x, y })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(extract_error(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
