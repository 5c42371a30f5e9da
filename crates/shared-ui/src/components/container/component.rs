use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::{tab_keys, HeaderMode, TabDescriptor};
use crate::NavTab;

/// Bordered card with an optional header above a clipped content region.
///
/// The header shows `labels` as a tab strip when non-empty, otherwise the
/// static `label`, otherwise nothing. `render_tab` replaces the built-in
/// [`NavTab`] for every tab. A caller `class` is appended to `container-card`.
#[component]
pub fn Container(
    label: Option<Element>,
    labels: Option<Vec<TabDescriptor>>,
    render_tab: Option<Callback<TabDescriptor, Element>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mode = HeaderMode::resolve(label, labels);

    // One warning per destination for the lifetime of this container
    let warned = use_hook(|| Rc::new(RefCell::new(Vec::<String>::new())));
    if cfg!(debug_assertions) {
        let fresh = newly_repeated(&mut warned.borrow_mut(), mode.duplicate_destinations());
        for destination in fresh {
            tracing::warn!(%destination, "container tabs share a destination");
        }
    }

    let base = vec![
        Attribute::new("class", "container-card", None, false),
        Attribute::new("data-header-mode", mode.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let content_class = if mode.has_header() {
        "container-content"
    } else {
        "container-content container-content-full"
    };

    let header = match mode {
        HeaderMode::Tabs(tabs) => {
            let keys = tab_keys(&tabs);
            rsx! {
                div { class: "container-header",
                    nav { class: "container-tab-strip", role: "tablist",
                        for (key, tab) in keys.into_iter().zip(tabs) {
                            TabSlot { key: "{key}", tab, render_tab }
                        }
                    }
                }
            }
        }
        HeaderMode::Static(label) => rsx! {
            div { class: "container-header",
                div { class: "container-label", {label} }
            }
        },
        HeaderMode::None => VNode::empty(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {header}
            div { class: content_class, {children} }
        }
    }
}

/// Repeated destinations not reported yet; records them in `warned`.
fn newly_repeated(warned: &mut Vec<String>, duplicates: Vec<&str>) -> Vec<String> {
    let mut fresh = Vec::new();
    for destination in duplicates {
        if !warned.iter().any(|seen| seen == destination) {
            warned.push(destination.to_string());
            fresh.push(destination.to_string());
        }
    }
    fresh
}

#[component]
fn TabSlot(tab: TabDescriptor, render_tab: Option<Callback<TabDescriptor, Element>>) -> Element {
    match render_tab {
        Some(render) => render.call(tab),
        None => rsx! { NavTab { tab } },
    }
}
