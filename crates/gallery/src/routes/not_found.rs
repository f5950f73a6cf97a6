use dioxus::prelude::*;

use super::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "gallery-page",
            h1 { "Nothing at /{path}" }
            Link { to: Route::Overview {}, "Back to the gallery" }
        }
    }
}
