use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("No route for /{}", path);

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 { class: "text-2xl font-bold mb-4", "Page not found" }
            p { class: "text-gray-600 mb-4", "Nothing lives at /{path}." }
            Link { to: Route::EmbeddingsComponent {}, "Back to Embeddings" }
        }
    }
}
