use dioxus::prelude::*;

use crate::{Badge, BadgeVariant, Spinner, TabDescriptor};

/// Default tab renderer used by [`Container`](crate::Container).
///
/// Renders a plain anchor pointing at the descriptor's destination. Apps that
/// route client-side can pass their own renderer to the container and reuse
/// [`NavTabContent`] for the inner markup.
#[component]
pub fn NavTab(tab: TabDescriptor) -> Element {
    let busy = tab.is_loading.then_some("true");

    rsx! {
        a {
            class: "nav-tab",
            role: "tab",
            href: "{tab.destination}",
            "data-destination": "{tab.destination}",
            "aria-busy": busy,
            NavTabContent { tab: tab.clone() }
        }
    }
}

/// Inner markup of a tab: icon, label, beta marker, busy indicator and
/// trailing content, in that order.
#[component]
pub fn NavTabContent(tab: TabDescriptor) -> Element {
    let TabDescriptor {
        label,
        icon,
        is_beta,
        is_loading,
        right_content,
        ..
    } = tab;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if let Some(icon) = icon {
            span { class: "nav-tab-icon", {icon} }
        }
        span { class: "nav-tab-label", {label} }
        if is_beta {
            Badge { variant: BadgeVariant::Beta, "Beta" }
        }
        if is_loading {
            Spinner { class: "nav-tab-spinner" }
        }
        if let Some(right) = right_content {
            span { class: "nav-tab-right", {right} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn plain_tab_links_to_destination() {
        fn app() -> Element {
            rsx! {
                NavTab { tab: TabDescriptor::new(rsx! { "History" }, "/history") }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"href="/history""#), "{html}");
        assert!(html.contains(r#"data-destination="/history""#), "{html}");
        assert!(html.contains(r#"role="tab""#), "{html}");
        assert!(html.contains(r#"<span class="nav-tab-label">History</span>"#), "{html}");
        assert!(!html.contains("aria-busy"), "{html}");
        assert!(!html.contains("badge"), "{html}");
    }

    #[test]
    fn content_keeps_field_order() {
        fn app() -> Element {
            rsx! {
                NavTabContent {
                    tab: TabDescriptor::new(rsx! { "Jobs" }, "/jobs")
                        .icon(rsx! { i { "*" } })
                        .beta(true)
                        .loading(true)
                        .right_content(rsx! { em { "3" } }),
                }
            }
        }
        let html = render(app);
        let icon = html.find("nav-tab-icon").expect("icon");
        let label = html.find("nav-tab-label").expect("label");
        let badge = html.find(">Beta<").expect("badge");
        let spinner = html.find("nav-tab-spinner").expect("spinner");
        let right = html.find("nav-tab-right").expect("right content");
        assert!(icon < label && label < badge && badge < spinner && spinner < right, "{html}");
    }
}
