use crate::error::JokeError;
use crate::request::RequestDescriptor;
use crate::types::{Joke, JokeBody};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait JokeService {
    async fn fetch(&self, request: &RequestDescriptor) -> Result<Joke, JokeError>;
}

/// Client for the public joke API
pub struct HttpJokeService {
    client: Client,
    base_url: String,
}

impl HttpJokeService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

// Joke API response shape
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokePayload {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub joke: Option<String>,
    #[serde(default)]
    pub setup: Option<String>,
    #[serde(default)]
    pub delivery: Option<String>,
    #[serde(default)]
    pub safe: bool,
    #[serde(default)]
    pub lang: Option<String>,
}

pub fn parse_joke_payload(body: &str) -> Result<Joke, JokeError> {
    let payload: JokePayload = serde_json::from_str(body)?;

    if payload.error {
        tracing::debug!(
            service_message = payload.message.as_deref().unwrap_or_default(),
            info = payload.additional_info.as_deref().unwrap_or_default(),
            "joke service reported no match"
        );
        return Err(JokeError::NoResults);
    }

    let body = match payload.kind.as_deref() {
        Some("single") => JokeBody::Single {
            joke: payload
                .joke
                .ok_or_else(|| JokeError::Transport("single joke without text".into()))?,
        },
        Some("twopart") => match (payload.setup, payload.delivery) {
            (Some(setup), Some(delivery)) => JokeBody::TwoPart { setup, delivery },
            _ => {
                return Err(JokeError::Transport(
                    "two-part joke without setup or delivery".into(),
                ));
            }
        },
        other => {
            return Err(JokeError::Transport(format!(
                "unknown joke type: {}",
                other.unwrap_or("<missing>")
            )));
        }
    };

    Ok(Joke {
        id: payload.id.unwrap_or_default(),
        category: payload.category.unwrap_or_default(),
        body,
        safe: payload.safe,
        lang: payload.lang,
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl JokeService for HttpJokeService {
    async fn fetch(&self, request: &RequestDescriptor) -> Result<Joke, JokeError> {
        let url = request.url(&self.base_url);
        tracing::debug!(%url, "requesting joke");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(JokeError::Transport(format!(
                "joke service error {status}: {body}"
            )));
        }

        parse_joke_payload(&body)
    }
}
