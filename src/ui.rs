use crate::config::AppConfig;
use crate::ledger::RecentSearches;
use crate::search::SearchState;
use crate::service::{HttpJokeService, JokeService};
use crate::store::default_store;
use crate::theme::{ThemeController, theme_definition};
use crate::types::{RecentSearchEntry, SearchSelection};
use crate::views::{FilterControls, RecentSearchesPanel, ResultArea, SearchBar};
use dioxus::prelude::*;
use std::rc::Rc;

const APP_CSS: Asset = asset!("/assets/jokecreator.css");

#[component]
pub fn App() -> Element {
    let config = AppConfig::current();
    let store = use_hook(|| default_store(config));
    let service = use_hook(|| Rc::new(HttpJokeService::new(config.base_url.clone())));

    let search = use_signal(|| SearchState::new(config.discard_stale_responses));
    let ledger = use_signal({
        let store = store.clone();
        move || RecentSearches::load(store)
    });
    let theme = use_signal(move || ThemeController::load(store));

    let run_search = use_callback(move |selection: SearchSelection| {
        let mut search = search;
        let mut ledger = ledger;
        let ticket = search.write().begin(selection);
        let service = service.clone();
        spawn(async move {
            let result = service.fetch(&ticket.request).await;
            search.write().finish(ticket, result, &mut ledger.write());
        });
    });

    let apply_recent = use_callback(move |entry: RecentSearchEntry| {
        let mut search = search;
        let selection = search.write().apply_recent(&entry);
        run_search.call(selection);
    });

    let mode = theme.read().mode();
    let definition = theme_definition(mode);

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        style { dangerous_inner_html: "{definition.css}" }
        div { class: "{definition.root_class}", "data-theme": mode.as_str(),
            div { class: "container",
                AppHeader {}
                div { class: "card",
                    SearchBar { search, on_submit: run_search }
                    FilterControls { search, theme }
                    p { class: "helper",
                        "Leave blank to get a surprise joke from the selected category."
                    }
                    RecentSearchesPanel { ledger, on_select: apply_recent }
                    ResultArea { search }
                }
            }
        }
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        header { class: "header",
            div { class: "logo-container",
                div { class: "logo-emoji", "😂" }
                div { class: "logo-text",
                    p { class: "eyebrow", "Joke Generator" }
                    h1 { "JokeCreator" }
                }
            }
            p { class: "subtitle",
                "Type a topic and get a joke tailored to it. Keep it fun and light!"
            }
        }
    }
}
