//! Builds joke service requests from the current selection.
//!
//! Pure and network free: the descriptor only becomes a URL when the
//! service client joins it with its configured base.

use crate::types::SearchSelection;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Same escape set as the browser's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParam {
    pub name: &'static str,
    /// Already percent-encoded. `None` renders as a bare flag.
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Percent-encoded category segment.
    pub category: String,
    pub query: Vec<QueryParam>,
}

impl RequestDescriptor {
    pub fn path(&self) -> String {
        format!("/joke/{}", self.category)
    }

    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .query
            .iter()
            .map(|param| match &param.value {
                Some(value) => format!("{}={}", param.name, value),
                None => param.name.to_string(),
            })
            .collect();
        Some(parts.join("&"))
    }

    pub fn url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self.query_string() {
            Some(query) => format!("{}{}?{}", base, self.path(), query),
            None => format!("{}{}", base, self.path()),
        }
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn build(selection: &SearchSelection) -> RequestDescriptor {
    let mut query = Vec::new();

    let topic = selection.trimmed_topic();
    if !topic.is_empty() {
        query.push(QueryParam {
            name: "contains",
            value: Some(encode_component(topic)),
        });
    }
    if selection.safe_mode {
        query.push(QueryParam {
            name: "safe-mode",
            value: None,
        });
    }

    RequestDescriptor {
        category: encode_component(selection.category.as_str()),
        query,
    }
}
