use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Any,
    Programming,
    Misc,
    Pun,
    Spooky,
    Christmas,
    Dark,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Any,
        Category::Programming,
        Category::Misc,
        Category::Pun,
        Category::Spooky,
        Category::Christmas,
        Category::Dark,
    ];

    /// Token used both in the service path and in the persisted ledger.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Any => "Any",
            Category::Programming => "Programming",
            Category::Misc => "Misc",
            Category::Pun => "Pun",
            Category::Spooky => "Spooky",
            Category::Christmas => "Christmas",
            Category::Dark => "Dark",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownValue(pub String);

impl FromStr for Category {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

/// What the user is currently asking for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSelection {
    pub topic: String,
    pub category: Category,
    pub safe_mode: bool,
}

impl Default for SearchSelection {
    fn default() -> Self {
        Self {
            topic: String::new(),
            category: Category::Any,
            safe_mode: true,
        }
    }
}

impl SearchSelection {
    pub fn new(topic: impl Into<String>, category: Category, safe_mode: bool) -> Self {
        Self {
            topic: topic.into(),
            category,
            safe_mode,
        }
    }

    pub fn trimmed_topic(&self) -> &str {
        self.topic.trim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSearchEntry {
    pub topic: String,
    pub category: Category,
    pub safe_mode: bool,
    pub id: String,
}

impl RecentSearchEntry {
    pub fn same_search(&self, topic: &str, category: Category, safe_mode: bool) -> bool {
        self.topic == topic && self.category == category && self.safe_mode == safe_mode
    }

    pub fn selection(&self) -> SearchSelection {
        SearchSelection::new(self.topic.clone(), self.category, self.safe_mode)
    }

    pub fn topic_label(&self) -> &str {
        if self.topic.is_empty() {
            "🎲 Surprise"
        } else {
            &self.topic
        }
    }

    pub fn meta_label(&self) -> String {
        let filter = if self.safe_mode {
            "🛡️ Safe"
        } else {
            "⚡ All"
        };
        format!("{} • {}", self.category, filter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JokeBody {
    Single { joke: String },
    TwoPart { setup: String, delivery: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Joke {
    pub id: u64,
    pub category: String,
    pub body: JokeBody,
    pub safe: bool,
    pub lang: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}
