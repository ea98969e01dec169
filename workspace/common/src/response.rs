//! Interpretation of `/predict` responses.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::prediction::PredictionResult;

/// Result of a call to the prediction service.
///
/// `Ok(None)` means the service answered but has no prediction to give
/// (nothing stored yet, or an empty record). `Err` is a transport or decoding
/// failure.
pub type PredictionOutcome = Result<Option<PredictionResult>, ApiError>;

/// Shape of a success body before the prediction is known to be present.
#[derive(Debug, Deserialize)]
struct RawPrediction {
    #[serde(default)]
    churn_prediction: Option<f64>,
    #[serde(default)]
    churn_probability: Option<f64>,
}

/// Body the service sends along with error statuses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Classifies an HTTP status and body into a [`PredictionOutcome`].
pub fn classify_response(status: u16, body: &str) -> PredictionOutcome {
    if status == 404 {
        debug!(status, "service has no stored prediction");
        return Ok(None);
    }

    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        let message = detail.error.or(detail.message);
        warn!(status, ?message, "prediction service returned an error status");
        return Err(ApiError::Status { status, message });
    }

    let raw: RawPrediction =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    match raw.churn_prediction {
        None => {
            debug!("response carries no prediction");
            Ok(None)
        }
        // Any JSON number equal to 0 or 1 is a label, so `1.0` counts as churn
        Some(label) if label == 0.0 || label == 1.0 => Ok(Some(PredictionResult {
            churn_prediction: label as u8,
            churn_probability: raw.churn_probability,
        })),
        Some(other) => Err(ApiError::Decode(format!(
            "churn_prediction must be 0 or 1, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_decodes_result() {
        let outcome = classify_response(200, r#"{"churn_prediction": 1, "churn_probability": 73.0}"#);
        assert_eq!(
            outcome,
            Ok(Some(PredictionResult { churn_prediction: 1, churn_probability: Some(73.0) }))
        );
    }

    #[test]
    fn test_missing_probability_is_allowed() {
        let outcome = classify_response(200, r#"{"churn_prediction": 0, "churn_probability": null}"#);
        assert_eq!(
            outcome,
            Ok(Some(PredictionResult { churn_prediction: 0, churn_probability: None }))
        );
    }

    #[test]
    fn test_empty_record_is_no_result() {
        let outcome = classify_response(200, r#"{"churn_prediction": null, "churn_probability": null}"#);
        assert_eq!(outcome, Ok(None));
        assert_eq!(classify_response(200, "{}"), Ok(None));
    }

    #[test]
    fn test_not_found_is_no_result() {
        let outcome = classify_response(
            404,
            r#"{"message": "No predictions yet. Please submit data first."}"#,
        );
        assert_eq!(outcome, Ok(None));
    }

    #[test]
    fn test_error_status_keeps_service_message() {
        let outcome = classify_response(500, r#"{"error": "model failed"}"#);
        assert_eq!(
            outcome,
            Err(ApiError::Status { status: 500, message: Some("model failed".to_string()) })
        );
    }

    #[test]
    fn test_error_status_without_json_body() {
        let outcome = classify_response(502, "<html>Bad Gateway</html>");
        assert_eq!(outcome, Err(ApiError::Status { status: 502, message: None }));
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        assert!(matches!(classify_response(200, "not json"), Err(ApiError::Decode(_))));
        assert!(matches!(
            classify_response(200, r#"{"churn_prediction": "yes"}"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_float_label_is_accepted() {
        let outcome = classify_response(200, r#"{"churn_prediction": 1.0, "churn_probability": 73.0}"#);
        assert_eq!(
            outcome,
            Ok(Some(PredictionResult { churn_prediction: 1, churn_probability: Some(73.0) }))
        );
        assert!(matches!(
            classify_response(200, r#"{"churn_prediction": 0.0}"#),
            Ok(Some(PredictionResult { churn_prediction: 0, .. }))
        ));
    }

    #[test]
    fn test_fractional_label_is_decode_error() {
        let outcome = classify_response(200, r#"{"churn_prediction": 0.5}"#);
        assert!(matches!(outcome, Err(ApiError::Decode(msg)) if msg.contains("got 0.5")));
    }

    #[test]
    fn test_out_of_range_label_is_decode_error() {
        let outcome = classify_response(200, r#"{"churn_prediction": 2, "churn_probability": 50}"#);
        assert!(matches!(outcome, Err(ApiError::Decode(msg)) if msg.contains("got 2")));
    }
}
