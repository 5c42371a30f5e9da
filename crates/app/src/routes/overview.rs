use dioxus::prelude::*;
use shared_ui::Container;

/// Landing page: a labelled summary next to a headerless notes panel.
#[component]
pub fn Overview() -> Element {
    rsx! {
        div { class: "page-grid",
            Container { label: rsx! { "Summary" },
                div { class: "page-body",
                    p { "Everything in this workspace is rendered inside containers." }
                    p { "Switch tabs above to move between pages." }
                }
            }
            Container { class: "notes-panel",
                div { class: "page-body",
                    p { "A container without a header gives its content the full card." }
                }
            }
        }
    }
}
