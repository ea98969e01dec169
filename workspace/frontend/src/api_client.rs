pub mod prediction;

use churn_common::{ApiError, PredictionOutcome, classify_response};
use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::settings::AppSettings;

/// Client for the prediction service.
///
/// Built once at startup from [`AppSettings`] and handed to pages through a
/// Yew context, so the base address is never a compile-time constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Common GET request handler
    pub(crate) async fn get(&self, endpoint: &str) -> PredictionOutcome {
        let url = self.url(endpoint);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_outcome("GET", endpoint, response).await
    }

    /// Common POST request handler
    pub(crate) async fn post<B>(&self, endpoint: &str, body: &B) -> PredictionOutcome
    where
        B: Serialize,
    {
        let url = self.url(endpoint);
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_outcome("POST", endpoint, response).await
    }
}

async fn read_outcome(method: &str, endpoint: &str, response: Response) -> PredictionOutcome {
    let status = response.status();
    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
    }

    log::trace!("{} {} - Response received, reading body", method, endpoint);
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let outcome = classify_response(status, &body);
    if let Ok(result) = &outcome {
        log::info!(
            "{} {} - Success ({})",
            method,
            endpoint,
            if result.is_some() { "prediction" } else { "no prediction" }
        );
    }
    outcome
}
