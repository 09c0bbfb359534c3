use crate::form::{Draft, Field, HousePriceForm, NumericPolicy};
use crate::predict::{PredictError, Predictor};
use crate::router::AppState;
use astra::Response;
use std::io::Read;
use std::sync::Mutex;

/// Values that pass every range check.
pub const EXAMPLE_VALUES: [(Field, &str); 5] = [
    (Field::Bathrooms, "3"),
    (Field::SquareFootage, "1800"),
    (Field::LotSize, "5000"),
    (Field::YearBuilt, "2005"),
    (Field::Bedrooms, "4"),
];

pub fn example_form() -> HousePriceForm {
    let mut form = HousePriceForm::new(NumericPolicy::Loose);
    for (field, raw) in EXAMPLE_VALUES {
        form.update_field(field, raw);
    }
    form
}

/// Urlencoded body for the example values, plus any extra pairs.
pub fn example_body(extra: &[(&str, &str)]) -> String {
    EXAMPLE_VALUES
        .iter()
        .map(|(field, raw)| (field.name(), *raw))
        .chain(extra.iter().copied())
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

enum Reply {
    Price(f64),
    Fail,
}

/// Predictor stand-in that records every draft it is asked about.
pub struct RecordingPredictor {
    reply: Reply,
    calls: Mutex<Vec<Draft>>,
}

impl RecordingPredictor {
    pub fn price(price: f64) -> Self {
        Self {
            reply: Reply::Price(price),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Reply::Fail,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Draft> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls mutex poisoned").len()
    }
}

impl Predictor for RecordingPredictor {
    fn predict(&self, draft: &Draft) -> Result<f64, PredictError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(draft.clone());

        match self.reply {
            Reply::Price(price) => Ok(price),
            Reply::Fail => Err(PredictError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            }),
        }
    }
}

pub fn test_state(predictor: RecordingPredictor) -> AppState<RecordingPredictor> {
    AppState {
        predictor,
        policy: NumericPolicy::Loose,
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
