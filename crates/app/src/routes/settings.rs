use dioxus::prelude::*;
use shared_types::DEFAULT_KEYS;
use shared_ui::Container;

#[component]
pub fn Settings() -> Element {
    let keys = DEFAULT_KEYS.join(", ");

    rsx! {
        div { class: "page-body",
            Container { label: rsx! { "Environment" },
                div { class: "page-body",
                    p { "The backend endpoint is read from .env ({keys})." }
                    p {
                        "Load it into your shell with "
                        code { "eval \"$(env-export)\"" }
                        "."
                    }
                }
            }
        }
    }
}
