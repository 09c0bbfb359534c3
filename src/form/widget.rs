// src/form/widget.rs

use crate::form::{current_year, validate, Draft, Field, FieldErrors, NumericPolicy};
use crate::predict::Predictor;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{error, info};

/// Per-field validation state. Only changes when the form is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState<'a> {
    Untouched,
    Valid,
    Invalid(&'a str),
}

/// What happened the last time the form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastSubmission {
    #[default]
    NotSubmitted,
    /// Validation failed; the network was not contacted.
    Rejected,
    Succeeded,
    /// The prediction call failed. Nothing is shown to the user.
    Failed,
}

impl LastSubmission {
    pub fn as_str(self) -> &'static str {
        match self {
            LastSubmission::NotSubmitted => "none",
            LastSubmission::Rejected => "rejected",
            LastSubmission::Succeeded => "succeeded",
            LastSubmission::Failed => "failed",
        }
    }
}

/// The house price form: draft values, field errors and the last price.
#[derive(Debug, Clone, Default)]
pub struct HousePriceForm {
    policy: NumericPolicy,
    draft: Draft,
    errors: FieldErrors,
    checked: bool,
    predicted_price: Option<f64>,
    last_submission: LastSubmission,
}

impl HousePriceForm {
    pub fn new(policy: NumericPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[cfg(test)]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn predicted_price(&self) -> Option<f64> {
        self.predicted_price
    }

    pub fn last_submission(&self) -> LastSubmission {
        self.last_submission
    }

    pub fn update_field(&mut self, field: Field, raw: impl Into<String>) {
        self.draft.set(field, raw);
    }

    /// Carries a price shown before this request over a stateless round-trip.
    pub fn restore_predicted_price(&mut self, price: f64) {
        self.predicted_price = Some(price);
    }

    pub fn field_state(&self, field: Field) -> FieldState<'_> {
        if !self.checked {
            return FieldState::Untouched;
        }

        match self.errors.get(&field) {
            Some(message) => FieldState::Invalid(message),
            None => FieldState::Valid,
        }
    }

    /// Price formatted for display, e.g. `$452133.70`.
    ///
    /// Zero, NaN and infinities are treated as "no price". Half-cents round
    /// away from zero.
    pub fn display_price(&self) -> Option<String> {
        self.predicted_price
            .filter(|price| *price != 0.0 && price.is_finite())
            .map(|price| format!("${}", format_cents(price)))
    }

    /// Validates against the current calendar year and, when valid, asks
    /// `predictor` for a price. Issues at most one prediction call.
    pub fn submit(&mut self, predictor: &impl Predictor) -> LastSubmission {
        self.submit_for_year(current_year(), predictor)
    }

    pub(crate) fn submit_for_year(
        &mut self,
        year: i32,
        predictor: &impl Predictor,
    ) -> LastSubmission {
        let errors = validate(&self.draft, year, self.policy);
        self.checked = true;

        if !errors.is_empty() {
            info!(invalid = errors.len(), "submission rejected by validation");
            self.errors = errors;
            self.last_submission = LastSubmission::Rejected;
            return self.last_submission;
        }

        self.errors.clear();

        self.last_submission = match predictor.predict(&self.draft) {
            Ok(price) => {
                info!(price, "price predicted");
                self.predicted_price = Some(price);
                LastSubmission::Succeeded
            }
            Err(e) => {
                error!(error = %e, "Error predicting house price");
                LastSubmission::Failed
            }
        };

        self.last_submission
    }
}

/// Two-decimal rendering of the exact binary value, ties rounded up in magnitude.
fn format_cents(price: f64) -> String {
    match Decimal::from_f64_retain(price) {
        Some(exact) => {
            let cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{cents:.2}")
        }
        // beyond Decimal's range there are no fractional digits left to round
        None => format!("{price:.2}"),
    }
}
