// predict/client.rs
use crate::form::Draft;
use crate::predict::{PredictError, Predictor};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predicted_price: f64,
}

/// Posts drafts to `{origin}/predict`.
pub struct HttpPredictor {
    client: Client,
    endpoint: String,
}

impl HttpPredictor {
    /// `timeout: None` waits for the endpoint indefinitely.
    pub fn new(origin: &str, timeout: Option<Duration>) -> Result<Self, PredictError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PredictError::Client)?;

        Ok(Self {
            client,
            endpoint: format!("{}/predict", origin.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, draft: &Draft) -> Result<f64, PredictError> {
        debug!(endpoint = %self.endpoint, "requesting price prediction");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .map_err(PredictError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(PredictError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().map_err(PredictError::Transport)?;
        let parsed: PredictResponse =
            serde_json::from_str(&text).map_err(|e| PredictError::Decode(e.to_string()))?;

        Ok(parsed.predicted_price)
    }
}
