/// Failures of a joke request, as the user sees them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JokeError {
    /// Network, HTTP status or payload decoding failure.
    #[error("joke service unavailable: {0}")]
    Transport(String),

    /// The service answered but flagged that nothing matched.
    #[error("no jokes matched the request")]
    NoResults,
}

pub const TRANSPORT_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NO_RESULTS_MESSAGE: &str = "No jokes found for that topic. Try another keyword.";

impl JokeError {
    pub fn user_message(&self) -> &'static str {
        match self {
            JokeError::Transport(_) => TRANSPORT_MESSAGE,
            JokeError::NoResults => NO_RESULTS_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for JokeError {
    fn from(err: reqwest::Error) -> Self {
        JokeError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for JokeError {
    fn from(err: serde_json::Error) -> Self {
        JokeError::Transport(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}
