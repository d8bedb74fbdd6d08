//! HTTP access behind a small trait.
//!
//! Both operations take any [`Fetch`] implementation. [`HttpFetcher`] is the
//! real one; tests script responses instead of hitting the network.

use crate::error::{Result, TelexError};
use std::time::Instant;
use tracing::{debug, instrument};

/// A response reduced to what the scrapers look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for issuing a single HTTP GET.
///
/// Implementors return `Err` only when no response was obtained. Any status
/// code, including errors, comes back as `Ok`.
pub trait Fetch {
    /// Fetch `url` and return its status and body.
    async fn get(&self, url: &str) -> Result<FetchResponse>;

    /// Fetch `url`, treating any status other than 200 as a failure.
    async fn get_ok(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        if response.status != 200 {
            return Err(TelexError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }
        Ok(response.body)
    }
}

/// [`Fetch`] backed by a shared `reqwest` client.
///
/// No timeouts or retries are configured beyond the client's defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxy, user agent, timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        let t0 = Instant::now();
        let http_error = |source| TelexError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(http_error)?;

        debug!(
            status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "GET completed"
        );
        Ok(FetchResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockFetcher;
    use super::*;

    #[tokio::test]
    async fn test_get_ok_returns_body_on_200() {
        let fetcher = MockFetcher::new().respond(200, "<rss/>");
        let body = fetcher.get_ok("https://telex.hu/rss").await.unwrap();
        assert_eq!(body, "<rss/>");
        assert_eq!(fetcher.requests(), vec!["https://telex.hu/rss".to_string()]);
    }

    #[tokio::test]
    async fn test_get_ok_rejects_other_statuses() {
        let fetcher = MockFetcher::new().respond(301, "moved");
        let err = fetcher.get_ok("https://telex.hu/old").await.unwrap_err();
        assert!(matches!(
            err,
            TelexError::Status { ref url, status: 301 } if url == "https://telex.hu/old"
        ));
    }

    #[tokio::test]
    async fn test_mock_defaults_to_404_when_drained() {
        let fetcher = MockFetcher::new();
        let response = fetcher.get("https://telex.hu/missing").await.unwrap();
        assert_eq!(response.status, 404);
    }
}
