// templates/pages/predict.rs

use crate::form::{Field, HousePriceForm};
use crate::templates::{
    components::{number_field, price_display},
    desktop_layout,
};
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "House Price Prediction";

pub fn predict_page(form: &HousePriceForm, current_year: i32) -> Markup {
    desktop_layout(
        PAGE_TITLE,
        html! {
            (predict_form(form, current_year))
        },
    )
}

/// The form itself. `data-submission` exposes the last outcome to scripts
/// and tests without rendering any text for it.
pub fn predict_form(form: &HousePriceForm, current_year: i32) -> Markup {
    html! {
        form
            method="post"
            action="/"
            class="predict-form"
            style="max-width: 400px; width: 100%;"
            data-submission=(form.last_submission().as_str())
        {
            h1 style="text-align: center;" { (PAGE_TITLE) }

            @for field in Field::ALL {
                (number_field(field, form.draft().get(field), form.field_state(field), current_year))
            }

            @if let Some(price) = form.predicted_price() {
                input type="hidden" name="predicted_price" value=(price);
            }

            button type="submit" class="primary" style="width: 100%; margin-top: 1rem;" {
                "Predict Price"
            }

            @if let Some(price) = form.display_price() {
                (price_display(&price))
            }
        }
    }
}
