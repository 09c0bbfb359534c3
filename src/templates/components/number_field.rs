use crate::form::{Field, FieldState};
use maud::{html, Markup};

/// A required number input with min/max hints and an inline error slot.
pub fn number_field(field: Field, value: &str, state: FieldState<'_>, current_year: i32) -> Markup {
    let bounds = field.bounds(current_year);
    let id = format!("field-{}", field.name());

    html! {
        div class=(if matches!(state, FieldState::Invalid(_)) { "field invalid" } else { "field" }) {
            label for=(id) { (field.label()) }
            input
                type="number"
                id=(id)
                name=(field.name())
                value=(value)
                min=(bounds.min)
                max=(bounds.max)
                aria-invalid=[matches!(state, FieldState::Invalid(_)).then_some("true")]
                required;

            @if let FieldState::Invalid(message) = state {
                p class="helper-text" { (message) }
            }
        }
    }
}
