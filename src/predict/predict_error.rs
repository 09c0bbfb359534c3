use thiserror::Error;

/// Every way the prediction call can fail. Callers treat them all alike.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Prediction endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed prediction response: {0}")]
    Decode(String),
}
