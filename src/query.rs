//! Search term resolution.
//!
//! Callers hand in either a structured query (a `query` field) or loose text.
//! Loose text may itself embed `query="..."`, in which case only the quoted
//! part is used.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static QUERY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"query=["']([^"']+)["']"#).expect("valid query pattern"));

/// Text that stands for "no query at all".
const NONE_LITERAL: &str = "None";

/// A search request as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The term was given explicitly.
    Structured { term: String },
    /// Arbitrary text, searched for an embedded `query="..."`.
    FreeText(String),
}

impl Query {
    pub fn structured(term: impl Into<String>) -> Self {
        Query::Structured { term: term.into() }
    }

    pub fn free_text(raw: impl Into<String>) -> Self {
        Query::FreeText(raw.into())
    }

    /// The plain search term, with the `None` literal mapped to empty.
    pub fn term(&self) -> String {
        let term = match self {
            Query::Structured { term } => term.as_str(),
            Query::FreeText(raw) => QUERY_PATTERN
                .captures(raw)
                .and_then(|caps| caps.get(1))
                .map_or(raw.as_str(), |m| m.as_str()),
        };

        if term == NONE_LITERAL {
            String::new()
        } else {
            term.to_string()
        }
    }

    /// The term as it goes into the feed URL. Only spaces are escaped.
    pub fn encoded_term(&self) -> String {
        self.term().replace(' ', "%20")
    }
}

impl Default for Query {
    fn default() -> Self {
        Query::FreeText(String::new())
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Query::FreeText(raw.to_string())
    }
}

impl From<String> for Query {
    fn from(raw: String) -> Self {
        Query::FreeText(raw)
    }
}

/// Objects carrying a `query` key become [`Query::Structured`]; every other
/// value is treated as free text in its textual form (`null` reads as `None`).
impl From<Value> for Query {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.contains_key("query") => {
                let term = map.remove("query").map(value_text).unwrap_or_default();
                Query::Structured { term }
            }
            other => Query::FreeText(value_text(other)),
        }
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => NONE_LITERAL.to_string(),
        other => other.to_string(),
    }
}
