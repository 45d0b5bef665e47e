use crate::search::{JokeBlock, ResultPanel, SearchState, joke_blocks};
use crate::types::{Joke, SearchSelection};
use dioxus::prelude::*;

#[component]
pub fn ResultArea(search: Signal<SearchState>) -> Element {
    let state = search();

    match state.result_panel() {
        ResultPanel::Error(message) => rsx! {
            div { class: "error",
                span { class: "error-icon", "⚠️" }
                "{message}"
            }
        },
        ResultPanel::Joke(joke) => rsx! {
            JokeCard { joke: joke.clone(), selection: state.selection.clone() }
        },
        ResultPanel::Empty => rsx! {},
    }
}

/// The pills follow the live selection, not the one the joke was fetched with.
#[component]
fn JokeCard(joke: Joke, selection: SearchSelection) -> Element {
    let category = if joke.category.is_empty() {
        "Any".to_string()
    } else {
        joke.category.clone()
    };
    let topic = selection.trimmed_topic().to_string();

    rsx! {
        div { class: "joke-box",
            div { class: "joke-header",
                span { class: "pill", "{category}" }
                if !topic.is_empty() {
                    span { class: "pill ghost", "🔍 {topic}" }
                }
                if selection.safe_mode {
                    span { class: "pill ghost", "🛡️ Safe" }
                }
            }
            div { class: "joke-content",
                div { class: "joke-text",
                    for block in joke_blocks(&joke) {
                        {
                            match block {
                                JokeBlock::Text(text) => rsx! { p { class: "joke-line", "{text}" } },
                                JokeBlock::Setup(text) => rsx! { p { class: "setup", "{text}" } },
                                JokeBlock::Delivery(text) => rsx! { p { class: "punchline", "{text}" } },
                            }
                        }
                    }
                }
            }
            div { class: "joke-footer",
                span { class: "joke-id", "ID: {joke.id}" }
            }
        }
    }
}
