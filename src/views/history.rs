use crate::ledger::RecentSearches;
use crate::types::RecentSearchEntry;
use dioxus::prelude::*;

/// Hidden entirely while the ledger is empty.
#[component]
pub fn RecentSearchesPanel(
    ledger: Signal<RecentSearches>,
    on_select: Callback<RecentSearchEntry>,
) -> Element {
    let mut ledger = ledger;
    let entries = ledger.read().entries().to_vec();
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "history",
            div { class: "history-header",
                h2 {
                    span { class: "history-icon", "🕒" }
                    "Recent searches"
                }
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| ledger.write().clear(),
                    "Clear all"
                }
            }
            div { class: "history-list",
                for entry in entries {
                    HistoryItem { key: "{entry.id}", entry: entry.clone(), on_select }
                }
            }
        }
    }
}

#[component]
fn HistoryItem(entry: RecentSearchEntry, on_select: Callback<RecentSearchEntry>) -> Element {
    let topic = entry.topic_label().to_string();
    let meta = entry.meta_label();

    rsx! {
        button {
            class: "history-item",
            r#type: "button",
            onclick: move |_| on_select.call(entry.clone()),
            span { class: "history-topic", "{topic}" }
            span { class: "history-meta", "{meta}" }
        }
    }
}
