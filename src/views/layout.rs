use dioxus::prelude::*;
use crate::routes::Route;
use crate::utils::use_theme;

const LAYOUT_CSS: Asset = asset!("/assets/styling/layout.css");

#[component]
pub fn Layout() -> Element {
    let mut theme = use_theme();
    let is_dark = theme.is_dark();

    let link_class = if is_dark {
        "text-white hover:text-primary transition-colors"
    } else {
        "text-gray-800 hover:text-primary transition-colors"
    };

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: LAYOUT_CSS }

            nav {
                class: if is_dark {
                    "bg-dark-primary shadow-lg transition-colors duration-200"
                } else {
                    "bg-white shadow-lg transition-colors duration-200"
                },
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        Link {
                            class: link_class,
                            to: Route::EmbeddingsComponent {},
                            "Embeddings"
                        }
                        Link {
                            class: link_class,
                            to: Route::ModelDemoComponent {},
                            "Model Demo"
                        }
                    }
                    button {
                        class: if is_dark {
                            "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                        } else {
                            "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
                        },
                        title: "Toggle theme",
                        onclick: move |_| theme.toggle(),
                        if is_dark {
                            "🌞"
                        } else {
                            "🌙"
                        }
                    }
                }
            }
            main {
                class: "container mx-auto p-4",
                Outlet::<Route> {}
            }
        }
    }
}
