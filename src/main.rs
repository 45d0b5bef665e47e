use jokecreator::config::AppConfig;
use std::collections::HashMap;

/// Bundled config for web and mobile builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // .env file for desktop dev; missing is fine
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(error = %err, "no .env file loaded");
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

/// Bundled KEY=VALUE pairs, consulted after the process environment.
fn bundled_config() -> HashMap<String, String> {
    dotenvy::from_read_iter(BUNDLED_CONFIG.as_bytes())
        .filter_map(|item| match item {
            Ok(pair) => Some(pair),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed bundled config line");
                None
            }
        })
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// dioxus-web installs its own console logger
#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() -> anyhow::Result<()> {
    init_tracing();
    load_dotenv();
    let bundled = bundled_config();
    let config = AppConfig::from_lookup(|key| {
        std::env::var(key).ok().or_else(|| bundled.get(key).cloned())
    })
    .install();
    config.validate()?;
    tracing::info!(base_url = %config.base_url, "starting jokecreator");
    dioxus::launch(jokecreator::ui::App);
    Ok(())
}
