// src/form/validate.rs

use crate::form::{loose_number, strict_number, Draft, Field, NumericPolicy};
use std::collections::BTreeMap;

/// Failing field -> message. Empty means the draft is valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Runs the five range checks independently.
pub fn validate(draft: &Draft, current_year: i32, policy: NumericPolicy) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            check_field(field, draft.get(field), current_year, policy)
                .err()
                .map(|message| (field, message.to_string()))
        })
        .collect()
}

/// Checks a single raw value against the field's inclusive bounds.
pub fn check_field(
    field: Field,
    raw: &str,
    current_year: i32,
    policy: NumericPolicy,
) -> Result<(), &'static str> {
    if raw.is_empty() {
        return Err(field.message());
    }

    let bounds = field.bounds(current_year);
    let (min, max) = (bounds.min as f64, bounds.max as f64);

    let out_of_range = match policy {
        // NaN compares false both ways, so unparsable text is not out of range.
        NumericPolicy::Loose => {
            let value = loose_number(raw);
            value < min || value > max
        }
        NumericPolicy::Strict => match strict_number(raw) {
            Some(value) => value < min || value > max,
            None => true,
        },
    };

    if out_of_range {
        Err(field.message())
    } else {
        Ok(())
    }
}
