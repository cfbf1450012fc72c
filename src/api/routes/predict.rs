//! Predict Route
//!
//! `POST /api/predict {x, y}` → `{probability, recommendation}` for a
//! clicked court point.

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::game::{COURT_HEIGHT, COURT_WIDTH};
use crate::predict::{self, PredictRequest, PredictResponse};

/// POST /api/predict
pub async fn predict_shot(
    State(_state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    validate(&request)?;
    Ok(Json(predict::predict(&request)))
}

/// Reject non-finite or off-court coordinates before they reach the model.
fn validate(request: &PredictRequest) -> ApiResult<()> {
    if !request.x.is_finite() || !request.y.is_finite() {
        return Err(ApiError::Validation(
            "coordinates must be finite numbers".to_string(),
        ));
    }
    if !(0.0..=COURT_WIDTH).contains(&request.x) || !(0.0..=COURT_HEIGHT).contains(&request.y) {
        return Err(ApiError::Validation(format!(
            "point ({}, {}) is outside the court ({}x{})",
            request.x, request.y, COURT_WIDTH, COURT_HEIGHT
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_court_points() {
        assert!(validate(&PredictRequest { x: 250.0, y: 20.0 }).is_ok());
        assert!(validate(&PredictRequest { x: 0.0, y: 0.0 }).is_ok());
        assert!(validate(&PredictRequest { x: 500.0, y: 470.0 }).is_ok());
    }

    #[test]
    fn test_validate_rejects_off_court_points() {
        assert!(validate(&PredictRequest { x: -1.0, y: 20.0 }).is_err());
        assert!(validate(&PredictRequest { x: 250.0, y: 500.0 }).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(validate(&PredictRequest {
            x: f64::NAN,
            y: 20.0
        })
        .is_err());
        assert!(validate(&PredictRequest {
            x: 250.0,
            y: f64::INFINITY
        })
        .is_err());
    }
}
