//! Telex article page scraper.
//!
//! Article pages share one layout under `#cikk-content`: the headline sits in
//! the title section, and the article container holds the lead paragraph
//! followed by the rich-content body. Each region is looked up on its own;
//! a region that is missing falls back to its default instead of failing.

use crate::error::TelexError;
use crate::fetch::Fetch;
use crate::models::ArticleContent;
use crate::utils::{element_text, truncate_for_log};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#cikk-content > div.title-section > div.title-section__top > h1")
        .expect("valid title selector")
});

static LEAD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "#cikk-content > div.article_body_ > div.article_container_.article-box-margin > p",
    )
    .expect("valid lead selector")
});

static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "#cikk-content > div.article_body_ > div.article_container_.article-box-margin > div.article-html-content",
    )
    .expect("valid body selector")
});

/// Text of the first element matching `selector`, if any.
fn region_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(element_text)
}

/// Extract title, lead and body from an article page.
pub fn extract_article(url: &str, html: &str) -> ArticleContent {
    let document = Html::parse_document(html);

    let title = region_text(&document, &TITLE_SELECTOR);
    let lead = region_text(&document, &LEAD_SELECTOR);
    let body = region_text(&document, &BODY_SELECTOR);
    debug!(
        has_title = title.is_some(),
        has_lead = lead.is_some(),
        has_body = body.is_some(),
        "Located article regions"
    );

    ArticleContent::compose(url, title, lead, body)
}

/// Fetch and extract an article, surfacing fetch failures.
#[instrument(level = "info", skip(fetcher))]
pub async fn try_fetch_article_content<F: Fetch>(
    fetcher: &F,
    url: &str,
) -> Result<ArticleContent, TelexError> {
    let html = fetcher.get_ok(url).await?;
    let article = extract_article(url, &html);
    info!(
        bytes = article.content.len(),
        title = %truncate_for_log(&article.title, 80),
        "Parsed Telex article"
    );
    Ok(article)
}

/// Fetch and extract an article. Never fails: when the page cannot be
/// fetched the failure is logged and a default-filled record is returned.
pub async fn fetch_article_content<F: Fetch>(fetcher: &F, url: &str) -> ArticleContent {
    match try_fetch_article_content(fetcher, url).await {
        Ok(article) => article,
        Err(e) => {
            warn!(%url, error = %e, "Failed to fetch article");
            ArticleContent::unavailable(url)
        }
    }
}
