use anyhow::{Result, ensure};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://v2.jokeapi.dev";

static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Joke service origin, without the `/joke/...` path.
    pub base_url: String,
    /// Overrides the native preference directory.
    pub data_dir: Option<PathBuf>,
    /// Drop responses that arrive after a newer request was issued.
    pub discard_stale_responses: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: None,
            discard_stale_responses: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("JOKE_API_BASE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let data_dir = lookup("JOKECREATOR_DATA_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let discard_stale_responses = lookup("JOKECREATOR_DISCARD_STALE")
            .map(|value| {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes" | "on"
                )
            })
            .unwrap_or(false);

        Self {
            base_url,
            data_dir,
            discard_stale_responses,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.base_url.starts_with("http://") || self.base_url.starts_with("https://"),
            "JOKE_API_BASE_URL must be an http(s) URL, got {:?}",
            self.base_url
        );
        Ok(())
    }

    /// Install the process-wide configuration. The first call wins.
    pub fn install(self) -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| self)
    }

    /// The installed configuration, or one read from the environment.
    pub fn current() -> &'static AppConfig {
        APP_CONFIG.get_or_init(AppConfig::from_env)
    }
}
