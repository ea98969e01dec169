use churn_common::{PredictionOutcome, PredictionRequest};

use super::ApiClient;

const PREDICT_ENDPOINT: &str = "/predict";

impl ApiClient {
    /// Submits customer attributes and returns the service's prediction.
    ///
    /// Failures are logged here and come back as `Err` values; the call never
    /// panics, so pages only decide which banner to show.
    pub async fn submit_prediction(&self, request: &PredictionRequest) -> PredictionOutcome {
        log::trace!("Submitting prediction request: {:?}", request);
        let result = self.post(PREDICT_ENDPOINT, request).await;

        match &result {
            Ok(Some(prediction)) => log::info!(
                "Prediction received: churn={} probability={:?}",
                prediction.churn_prediction,
                prediction.churn_probability
            ),
            Ok(None) => log::warn!("Prediction service answered without a prediction"),
            Err(e) => log::error!("Error fetching prediction: {}", e),
        }

        result
    }

    /// Fetches the most recently stored prediction.
    pub async fn fetch_latest_prediction(&self) -> PredictionOutcome {
        log::trace!("Fetching latest prediction");
        let result = self.get(PREDICT_ENDPOINT).await;

        match &result {
            Ok(Some(_)) => log::info!("Successfully fetched latest prediction"),
            Ok(None) => log::info!("No stored prediction available"),
            Err(e) => log::error!("Error fetching latest prediction: {}", e),
        }

        result
    }
}
