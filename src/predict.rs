//! Shot Prediction
//!
//! Placeholder shot model behind `POST /api/predict`. Probability falls off
//! with distance from the basket; a real deployment would swap this for a
//! trained model fed with defender distance, game clock, and hot-hand
//! features. The request/response contract is the part that matters here.

use serde::{Deserialize, Serialize};

use crate::game::{BASKET_X, BASKET_Y};

/// Probability at the rim.
const RIM_PROBABILITY: f64 = 0.62;

/// Probability lost per foot of distance from the basket.
const DECAY_PER_FOOT: f64 = 0.011;

/// Court pixels per foot.
const PIXELS_PER_FOOT: f64 = 10.0;

/// Request body for `POST /api/predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// Court-pixel x coordinate of the clicked point
    pub x: f64,
    /// Court-pixel y coordinate of the clicked point
    pub y: f64,
}

/// Response body for `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Shot-success probability in [0, 1]
    pub probability: f64,
    /// Optional coaching text for the banner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Estimated make probability for a shot from court-pixel `(x, y)`.
///
/// Monotonically non-increasing in distance from the basket, clamped to
/// [0.05, 0.95] so the dashboard never shows a certainty.
pub fn shot_probability(x: f64, y: f64) -> f64 {
    let dx = x - BASKET_X;
    let dy = y - BASKET_Y;
    let distance_ft = (dx * dx + dy * dy).sqrt() / PIXELS_PER_FOOT;

    (RIM_PROBABILITY - DECAY_PER_FOOT * distance_ft).clamp(0.05, 0.95)
}

/// Coaching text for a given make probability.
pub fn recommendation(probability: f64) -> String {
    if probability >= 0.55 {
        "Excellent look - take the shot".to_string()
    } else if probability >= 0.45 {
        "Good shot opportunity".to_string()
    } else if probability >= 0.35 {
        "Contested - consider swinging the ball".to_string()
    } else {
        "Low percentage - work for a better look".to_string()
    }
}

/// Full prediction for a clicked point.
pub fn predict(request: &PredictRequest) -> PredictResponse {
    let probability = shot_probability(request.x, request.y);
    PredictResponse {
        recommendation: Some(recommendation(probability)),
        probability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COURT_HEIGHT, COURT_WIDTH};

    #[test]
    fn test_probability_peaks_at_the_rim() {
        let at_rim = shot_probability(BASKET_X, BASKET_Y);
        let midrange = shot_probability(BASKET_X, 200.0);
        let halfcourt = shot_probability(BASKET_X, COURT_HEIGHT);

        assert!(at_rim > midrange);
        assert!(midrange > halfcourt);
        assert_eq!(at_rim, RIM_PROBABILITY);
    }

    #[test]
    fn test_probability_bounded_everywhere() {
        let mut x = 0.0;
        while x <= COURT_WIDTH {
            let mut y = 0.0;
            while y <= COURT_HEIGHT {
                let p = shot_probability(x, y);
                assert!((0.05..=0.95).contains(&p), "p={} at ({}, {})", p, x, y);
                y += 47.0;
            }
            x += 50.0;
        }
    }

    #[test]
    fn test_probability_symmetric_about_the_lane() {
        let left = shot_probability(BASKET_X - 120.0, 150.0);
        let right = shot_probability(BASKET_X + 120.0, 150.0);
        assert!((left - right).abs() < 1e-12);
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert!(recommendation(0.60).contains("Excellent"));
        assert!(recommendation(0.50).contains("Good"));
        assert!(recommendation(0.40).contains("Contested"));
        assert!(recommendation(0.10).contains("Low percentage"));
    }

    #[test]
    fn test_predict_fills_both_fields() {
        let response = predict(&PredictRequest { x: 250.0, y: 20.0 });
        assert!(response.probability > 0.5);
        assert!(response.recommendation.is_some());
    }
}
