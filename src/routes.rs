use dioxus::prelude::*;
use crate::views::{ EmbeddingsComponent, Layout, ModelDemoComponent, PageNotFound };

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/EmbeddingsComponent")]
        EmbeddingsComponent {},
        #[route("/ModelDemoComponent")]
        ModelDemoComponent {},
    #[end_layout]
    #[redirect("/", || Route::EmbeddingsComponent {})]
    #[route("/:..segments")]
    PageNotFound {
        segments: Vec<String>,
    },
}
