use dioxus::prelude::*;
use shared_ui::{Container, Spinner};

use super::SyncState;

/// Count shown next to the Activity tab.
pub const UNREAD: usize = 3;

const EVENTS: &[&str] = &[
    "Session started",
    "Workspace opened",
    "Settings changed",
];

#[component]
pub fn Activity() -> Element {
    let mut sync = use_context::<SyncState>();
    let syncing = *sync.syncing.read();

    rsx! {
        div { class: "page-body",
            Container { label: rsx! { "Recent activity" },
                ul { class: "activity-list",
                    for event in EVENTS.iter() {
                        li { key: "{event}", "{event}" }
                    }
                }
            }
            button {
                onclick: move |_| {
                    let next = !*sync.syncing.peek();
                    tracing::debug!(syncing = next, "toggled sync");
                    sync.syncing.set(next);
                },
                if syncing { "Stop sync" } else { "Start sync" }
            }
            if syncing {
                Spinner {}
            }
        }
    }
}
