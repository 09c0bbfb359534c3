// errors.rs
use thiserror::Error;

/// Errors raised while routing or handling a request.
///
/// Prediction failures are not here: the form absorbs them.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}
