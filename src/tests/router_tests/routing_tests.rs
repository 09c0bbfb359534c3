use crate::router::handle;
use crate::tests::utils::{body_string, test_state, RecordingPredictor};
use astra::Body;
use http::{Method, Request};

#[test]
fn form_page_loads_successfully() {
    let state = test_state(RecordingPredictor::price(1.0));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("House Price Prediction"));
    assert!(body.contains("Predict Price"));
    assert!(!body.contains("Predicted Price:"));
    assert!(!body.contains("helper-text"));
    assert!(body.contains(r#"data-submission="none""#));
    assert_eq!(state.predictor.call_count(), 0);
}

#[test]
fn form_page_shows_range_hints() {
    let state = test_state(RecordingPredictor::price(1.0));
    let year = crate::form::current_year();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains(r#"name="bathrooms""#));
    assert!(body.contains(r#"min="1" max="6""#));
    assert!(body.contains(r#"min="500" max="10000""#));
    assert!(body.contains(r#"min="1000" max="50000""#));
    assert!(body.contains(&format!(r#"min="1900" max="{year}""#)));
    assert!(body.contains(r#"min="1" max="10""#));
    assert_eq!(body.matches("required").count(), 5);
}

#[test]
fn health_check_returns_ok() {
    let state = test_state(RecordingPredictor::price(1.0));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state(RecordingPredictor::price(1.0));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/predict")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));

    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}
