use crate::errors::ServerError;
use crate::form::{current_year, Field, HousePriceForm, NumericPolicy};
use crate::predict::Predictor;
use crate::responses::{html_response, text_response, ResultResp};
use crate::templates;
use astra::Request;
use std::io::Read;
use tracing::{debug, info};
use url::form_urlencoded;

/// Largest request body read. A filled-in form is a few hundred bytes.
const MAX_BODY_BYTES: u64 = 16 * 1024;

/// Form field carrying the price shown before the current request.
const PRIOR_PRICE_FIELD: &str = "predicted_price";

/// Shared by all worker threads. Forms themselves are built per request.
pub struct AppState<P> {
    pub predictor: P,
    pub policy: NumericPolicy,
}

pub fn handle<P: Predictor>(req: Request, state: &AppState<P>) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let form = HousePriceForm::new(state.policy);
            html_response(templates::pages::predict_page(&form, current_year()))
        }
        ("POST", "/") => submit_form(req, state),
        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn submit_form<P: Predictor>(req: Request, state: &AppState<P>) -> ResultResp {
    let body = read_body(req)?;
    let mut form = HousePriceForm::new(state.policy);

    for (key, value) in form_urlencoded::parse(&body) {
        if key == PRIOR_PRICE_FIELD {
            match value.parse::<f64>() {
                Ok(price) if price.is_finite() => form.restore_predicted_price(price),
                _ => debug!(%value, "ignoring unusable prior price"),
            }
            continue;
        }

        match Field::from_name(&key) {
            Some(field) => form.update_field(field, value.into_owned()),
            None => debug!(%key, "ignoring unknown form field"),
        }
    }

    let outcome = form.submit(&state.predictor);
    info!(outcome = outcome.as_str(), "form submitted");

    html_response(templates::pages::predict_page(&form, current_year()))
}

fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut bytes = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;

    if bytes.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest(format!(
            "Request body exceeds {MAX_BODY_BYTES} bytes"
        )));
    }

    Ok(bytes)
}
