use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                main
                    class="container narrow"
                    style="display: flex; align-items: center; justify-content: center; min-height: 100vh;"
                {
                    (content)
                }
            }
        }
    }
}
