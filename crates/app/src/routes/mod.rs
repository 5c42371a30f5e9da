pub mod activity;
pub mod not_found;
pub mod overview;
pub mod settings;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdLayoutDashboard, LdSettings};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeVariant, Container, NavTabContent, TabDescriptor};

use activity::Activity;
use not_found::NotFound;
use overview::Overview;
use settings::Settings;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Workspace)]
    #[route("/")]
    Overview {},
    #[route("/activity")]
    Activity {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Whether a background sync is running, shared across workspace pages.
#[derive(Clone, Copy)]
pub struct SyncState {
    pub syncing: Signal<bool>,
}

/// Tabs shown above every workspace page. Destinations come from [`Route`]
/// so they stay unique and routable.
pub fn workspace_tabs(syncing: bool, unread: usize) -> Vec<TabDescriptor> {
    let unread_marker = if unread > 0 {
        rsx! {
            Badge { variant: BadgeVariant::Neutral, class: "tab-count", "{unread}" }
        }
    } else {
        VNode::empty()
    };

    vec![
        TabDescriptor::new(rsx! { "Overview" }, Route::Overview {}.to_string())
            .icon(rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 14, height: 14 } }),
        TabDescriptor::new(rsx! { "Activity" }, Route::Activity {}.to_string())
            .icon(rsx! { Icon::<LdActivity> { icon: LdActivity, width: 14, height: 14 } })
            .loading(syncing)
            .right_content(unread_marker),
        TabDescriptor::new(rsx! { "Settings" }, Route::Settings {}.to_string())
            .icon(rsx! { Icon::<LdSettings> { icon: LdSettings, width: 14, height: 14 } })
            .beta(true),
    ]
}

/// Layout wrapping every workspace page in a tabbed container.
#[component]
fn Workspace() -> Element {
    let sync = use_context::<SyncState>();
    let tabs = workspace_tabs(*sync.syncing.read(), activity::UNREAD);

    rsx! {
        main { class: "workspace",
            Container {
                labels: tabs,
                render_tab: Callback::new(|tab: TabDescriptor| rsx! { RouterTab { tab } }),
                Outlet::<Route> {}
            }
        }
    }
}

/// Tab renderer for workspace pages: marks the tab matching the current
/// route as active.
#[component]
fn RouterTab(tab: TabDescriptor) -> Element {
    let route = use_route::<Route>();
    let active = route.to_string() == tab.destination;

    rsx! {
        TabLink { tab, active }
    }
}

/// Anchor carrying the same attributes as the built-in tab, navigating
/// through the router instead of reloading the page.
#[component]
fn TabLink(tab: TabDescriptor, active: bool) -> Element {
    let class = if active { "nav-tab active" } else { "nav-tab" };
    let busy = tab.is_loading.then_some("true");
    let current = active.then_some("page");
    let destination = tab.destination.clone();

    rsx! {
        a {
            class: "{class}",
            role: "tab",
            href: "{tab.destination}",
            "data-destination": "{tab.destination}",
            "aria-busy": busy,
            "aria-current": current,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                navigator().push(destination.as_str());
            },
            NavTabContent { tab: tab.clone() }
        }
    }
}
