mod client;
mod predict_error;

pub use client::HttpPredictor;
pub use predict_error::PredictError;

use crate::form::Draft;

/// Anything that can turn a draft into a price.
pub trait Predictor {
    fn predict(&self, draft: &Draft) -> Result<f64, PredictError>;
}
