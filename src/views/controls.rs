use crate::search::{SearchState, submit_label};
use crate::theme::ThemeController;
use crate::types::{Category, SearchSelection, ThemeMode};
use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn SearchBar(search: Signal<SearchState>, on_submit: Callback<SearchSelection>) -> Element {
    let mut search = search;
    let state = search();
    let (icon, label) = submit_label(state.is_loading());

    rsx! {
        div { class: "input-section",
            label { class: "label", r#for: "topic-input",
                span { class: "label-icon", "🔍" }
                "Topic"
            }
            div { class: "input-row",
                input {
                    id: "topic-input",
                    class: "input",
                    r#type: "text",
                    placeholder: "e.g., coding, cats, space",
                    value: "{state.selection.topic}",
                    oninput: move |ev| search.write().set_topic(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            let selection = search.read().selection.clone();
                            on_submit.call(selection);
                        }
                    },
                }
                button {
                    class: "primary-button",
                    r#type: "button",
                    disabled: state.is_loading(),
                    onclick: move |_| {
                        let selection = search.read().selection.clone();
                        on_submit.call(selection);
                    },
                    span { class: "button-icon", "{icon}" }
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn FilterControls(search: Signal<SearchState>, theme: Signal<ThemeController>) -> Element {
    let mut search = search;
    let mut theme = theme;
    let selection = search.read().selection.clone();
    let mode = theme.read().mode();

    rsx! {
        div { class: "controls",
            div { class: "control-group",
                label { class: "label", r#for: "category-select",
                    span { class: "label-icon", "📂" }
                    "Category"
                }
                select {
                    id: "category-select",
                    class: "select",
                    value: selection.category.as_str(),
                    onchange: move |ev| match ev.value().parse::<Category>() {
                        Ok(category) => search.write().set_category(category),
                        Err(err) => tracing::warn!(error = %err, "ignoring category"),
                    },
                    for category in Category::ALL {
                        option {
                            value: category.as_str(),
                            selected: category == selection.category,
                            "{category}"
                        }
                    }
                }
            }
            div { class: "control-group",
                label { class: "label", r#for: "theme-select",
                    span { class: "label-icon", "🎨" }
                    "Theme"
                }
                select {
                    id: "theme-select",
                    class: "select",
                    value: mode.as_str(),
                    onchange: move |ev| match ev.value().parse::<ThemeMode>() {
                        Ok(next) => theme.write().set(next),
                        Err(err) => tracing::warn!(error = %err, "ignoring theme"),
                    },
                    for option_mode in ThemeMode::ALL {
                        option {
                            value: option_mode.as_str(),
                            selected: option_mode == mode,
                            "{option_mode.label()}"
                        }
                    }
                }
            }
            div { class: "control-group",
                span { class: "label",
                    span { class: "label-icon", "🛡️" }
                    "Safe mode"
                }
                label { class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: selection.safe_mode,
                        onchange: move |_| {
                            let current = search.read().selection.safe_mode;
                            search.write().set_safe_mode(!current);
                        },
                    }
                    span { class: "slider" }
                }
                span { class: "helper small", "Filters explicit jokes." }
            }
        }
    }
}
