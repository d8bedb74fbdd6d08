//! Telex archive search.
//!
//! The archive is exposed as a paginated RSS feed at
//! `https://telex.hu/rss/archivum`. A search walks the pages one at a time,
//! starting at page 1, until enough summaries are collected, a page comes
//! back empty, or a request fails.
//!
//! # URL Pattern
//!
//! ```text
//! https://telex.hu/rss/archivum?filters=<json>&perPage=10&oldal=<page>&term=<term>
//! ```

use crate::error::TelexError;
use crate::feed;
use crate::fetch::Fetch;
use crate::models::{ArticleSummary, SearchFilters};
use crate::query::Query;
use tracing::{debug, info, instrument, warn};

/// Archive feed endpoint.
pub const ARCHIVE_RSS_URL: &str = "https://telex.hu/rss/archivum";

/// Items requested per feed page.
pub const PER_PAGE: u32 = 10;

/// Result cap used when the caller does not choose one.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Why pagination ended.
#[derive(Debug)]
pub enum SearchStop {
    /// `max_results` summaries were collected.
    Filled,
    /// `page` contained no items, or nothing readable as a feed.
    Exhausted { page: u32 },
    /// Fetching `page` failed; earlier pages are still returned.
    FetchFailed { page: u32, error: TelexError },
}

/// Summaries in feed order plus the reason the search stopped.
#[derive(Debug)]
pub struct SearchOutcome {
    pub articles: Vec<ArticleSummary>,
    pub stop: SearchStop,
}

impl SearchOutcome {
    /// The fetch error that cut the search short, if any.
    pub fn failure(&self) -> Option<&TelexError> {
        match &self.stop {
            SearchStop::FetchFailed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn into_articles(self) -> Vec<ArticleSummary> {
        self.articles
    }
}

/// Build the request URL for one feed page.
///
/// `filters` must already be percent-encoded and `term` space-escaped.
pub fn feed_page_url(filters: &str, term: &str, page: u32) -> String {
    format!("{ARCHIVE_RSS_URL}?filters={filters}&perPage={PER_PAGE}&oldal={page}&term={term}")
}

/// Search the archive feed for `query`, returning at most `max_results`
/// summaries.
///
/// A failed page request ends the search and is reported in
/// [`SearchOutcome::stop`]. A page without any decodable `<item>` (an
/// empty feed, or an HTML error page served with 200) ends the search as
/// [`SearchStop::Exhausted`]. An item without `<title>` or `<link>` fails
/// the whole call.
///
/// # Errors
///
/// [`TelexError::MalformedItem`] or [`TelexError::Filters`].
#[instrument(level = "info", skip(fetcher, query), fields(term = tracing::field::Empty))]
pub async fn search_articles<F: Fetch>(
    fetcher: &F,
    query: &Query,
    max_results: usize,
) -> Result<SearchOutcome, TelexError> {
    let filters = SearchFilters::default().to_query_param()?;
    let term = query.encoded_term();
    tracing::Span::current().record("term", term.as_str());

    let mut articles = Vec::new();
    let mut page = 1u32;

    let stop = loop {
        if articles.len() >= max_results {
            break SearchStop::Filled;
        }

        let url = feed_page_url(&filters, &term, page);
        debug!(page, %url, "Fetching feed page");

        let body = match fetcher.get_ok(&url).await {
            Ok(body) => body,
            Err(error) => {
                warn!(page, error = %error, "Failed to fetch feed page");
                break SearchStop::FetchFailed { page, error };
            }
        };

        let items = feed::parse_items(&body);
        if items.is_empty() {
            info!(page, "No more articles found");
            break SearchStop::Exhausted { page };
        }

        let remaining = max_results - articles.len();
        for (index, item) in items.into_iter().take(remaining).enumerate() {
            articles.push(item.into_summary(page, index)?);
        }
        debug!(page, collected = articles.len(), "Feed page processed");

        page += 1;
    };

    info!(count = articles.len(), ?stop, "Archive search finished");
    Ok(SearchOutcome { articles, stop })
}
