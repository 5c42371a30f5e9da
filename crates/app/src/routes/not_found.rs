use dioxus::prelude::*;
use shared_ui::Container;

use crate::routes::Route;

/// 404 page, rendered in a headerless container.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        main { class: "workspace",
            Container {
                div { class: "page-body",
                    h1 { "Page not found" }
                    p {
                        "Nothing lives at "
                        code { "{path}" }
                        "."
                    }
                    Link { to: Route::Overview {}, "Back to overview" }
                }
            }
        }
    }
}
