use dioxus::prelude::*;

mod routes;
use routes::{Route, SyncState};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Drives the busy indicator on the Activity tab
    use_context_provider(|| SyncState {
        syncing: Signal::new(false),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
