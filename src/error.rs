//! Error types for feed searches and article fetches.

use thiserror::Error;

/// Errors raised while talking to telex.hu or decoding what it returns.
#[derive(Error, Debug)]
pub enum TelexError {
    /// The request never produced a response (DNS, connect, body read).
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200.
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// A feed `<item>` lacks one of its required children.
    #[error("feed item {index} on page {page} has no <{field}>")]
    MalformedItem {
        page: u32,
        index: usize,
        field: &'static str,
    },

    /// Search filters could not be serialized.
    #[error("failed to encode search filters: {0}")]
    Filters(#[from] serde_json::Error),
}

impl TelexError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TelexError::Status { status, .. } => Some(*status),
            TelexError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TelexError>;
