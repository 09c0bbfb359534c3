use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::warn;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into an HTML error page
pub fn error_to_response(err: ServerError) -> Response {
    let status = match err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::InternalError => 500,
    };

    if status >= 500 {
        warn!(status, error = %err, "request failed");
    }

    let body = error_page(status, &err.to_string()).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
