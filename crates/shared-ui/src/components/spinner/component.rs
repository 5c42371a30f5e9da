use dioxus::prelude::*;

/// Small inline busy indicator.
#[component]
pub fn Spinner(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![
        Attribute::new("class", "spinner", None, false),
        Attribute::new("role", "status", None, false),
        Attribute::new("aria-label", "Loading", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
        }
    }
}
