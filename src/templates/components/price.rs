use maud::{html, Markup};

pub fn price_display(price: &str) -> Markup {
    html! {
        h2 class="predicted-price" style="margin-top: 1rem; text-align: center;" {
            "Predicted Price: " (price)
        }
    }
}
