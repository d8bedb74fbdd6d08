//! # Telex News
//!
//! Search the [Telex](https://telex.hu) archive and pull article text.
//!
//! - [`search_articles`] walks the archive RSS feed page by page and returns
//!   up to `max_results` [`ArticleSummary`] values in feed order.
//! - [`fetch_article_content`] downloads one article page and extracts its
//!   title, lead and body into an [`ArticleContent`].
//!
//! Both take an HTTP capability implementing [`Fetch`]; [`HttpFetcher`] is
//! the `reqwest`-backed default.
//!
//! ```ignore
//! use telex_news::{HttpFetcher, Query, search_articles, fetch_article_content};
//!
//! let fetcher = HttpFetcher::new();
//! let outcome = search_articles(&fetcher, &Query::structured("árvíz"), 5).await?;
//! for summary in &outcome.articles {
//!     let article = fetch_article_content(&fetcher, &summary.url).await;
//!     println!("{}\n{}", article.title, article.content);
//! }
//! ```

pub mod error;
pub mod feed;
pub mod fetch;
pub mod models;
pub mod output;
pub mod query;
pub mod scrapers;
pub mod utils;

pub use error::{Result, TelexError};
pub use fetch::{Fetch, FetchResponse, HttpFetcher};
pub use models::{ArticleContent, ArticleSummary, SearchFilters, UNKNOWN_DATE, UNKNOWN_TITLE};
pub use query::Query;
pub use scrapers::article::{extract_article, fetch_article_content, try_fetch_article_content};
pub use scrapers::search::{
    ARCHIVE_RSS_URL, DEFAULT_MAX_RESULTS, PER_PAGE, SearchOutcome, SearchStop, feed_page_url,
    search_articles,
};
