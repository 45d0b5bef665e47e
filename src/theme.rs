use crate::store::{SharedStore, THEME_KEY};
use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub root_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            root_class: "app",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            root_class: "app app-dark",
        },
    }
}

/// Current display theme, persisted on every change.
pub struct ThemeController {
    mode: ThemeMode,
    store: SharedStore,
}

impl ThemeController {
    /// Reads the stored theme and applies it. Anything other than
    /// `light`/`dark` falls back to light.
    pub fn load(store: SharedStore) -> Self {
        let mode = match store.get(THEME_KEY) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring unknown stored theme");
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        };
        apply_root_attribute(mode);
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        apply_root_attribute(mode);
        if let Err(err) = self.store.set(THEME_KEY, mode.as_str()) {
            tracing::warn!(error = %err, "failed to persist theme");
        }
    }
}

/// Sets `data-theme` on the document element so page-level styles follow.
#[cfg(target_arch = "wasm32")]
pub fn apply_root_attribute(mode: ThemeMode) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }
}

/// Native webviews pick the theme up from the root container instead.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_root_attribute(_mode: ThemeMode) {}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f7f4ef;
    --color-bg-card: #ffffff;
    --color-text-primary: #1d1b19;
    --color-text-muted: #5f5a55;
    --color-border: #e2ddd5;
    --color-input-bg: #ffffff;
    --color-accent: #ff7a18;
    --color-accent-text: #ffffff;
    --color-pill-bg: #fff1e3;
    --color-error-bg: #fdecea;
    --color-error-text: #a4261b;
    --color-history-bg: #faf8f5;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #121212;
    --color-bg-card: #1c1c1e;
    --color-text-primary: #f2f2f2;
    --color-text-muted: #a7a7a7;
    --color-border: #2f2f33;
    --color-input-bg: #111113;
    --color-accent: #ff9a4d;
    --color-accent-text: #121212;
    --color-pill-bg: #2b2118;
    --color-error-bg: #3a1614;
    --color-error-text: #ffb4ab;
    --color-history-bg: #18181a;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordingStore;
    use std::sync::Arc;

    #[test]
    fn test_defaults_to_light() {
        let store = Arc::new(RecordingStore::new());
        let theme = ThemeController::load(store.clone());
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_loads_stored_theme() {
        let store = Arc::new(RecordingStore::with_value(THEME_KEY, "dark"));
        let theme = ThemeController::load(store);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_unknown_stored_theme_falls_back() {
        let store = Arc::new(RecordingStore::with_value(THEME_KEY, "octane"));
        let theme = ThemeController::load(store);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_set_persists_once() {
        let store = Arc::new(RecordingStore::new());
        let mut theme = ThemeController::load(store.clone());
        theme.set(ThemeMode::Dark);

        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(
            store.writes(),
            vec![(THEME_KEY.to_string(), "dark".to_string())]
        );
    }

    #[test]
    fn test_definitions_differ() {
        let light = theme_definition(ThemeMode::Light);
        let dark = theme_definition(ThemeMode::Dark);
        assert_ne!(light.css, dark.css);
        assert!(dark.root_class.contains("app-dark"));
    }
}
