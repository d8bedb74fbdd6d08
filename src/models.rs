//! Data models for feed search results and scraped articles.
//!
//! - [`SearchFilters`]: server-side filter block sent with every feed request
//! - [`ArticleSummary`]: one entry of the archive RSS feed
//! - [`ArticleContent`]: title and text scraped from a single article page
//!
//! Nothing here is persisted; values are built per call and handed back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Placeholder for an absent `<pubDate>`.
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Placeholder for an article page without a recognizable title.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Filter block of the archive feed query.
///
/// The archive endpoint accepts tag, super tag, author and title filters.
/// All four are left empty; the set is still sent because the endpoint
/// expects the parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub and_tags: BTreeSet<String>,
    #[serde(rename = "superTags")]
    pub super_tags: BTreeSet<String>,
    pub authors: BTreeSet<String>,
    pub title: BTreeSet<String>,
}

impl SearchFilters {
    /// Serialize to JSON and percent-encode the result for use as the
    /// `filters` query parameter. Non-ASCII characters are written as-is
    /// before encoding.
    pub fn to_query_param(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(urlencoding::encode(&json).into_owned())
    }
}

/// A single entry from the archive feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Headline as published in the feed.
    pub title: String,
    /// Absolute link to the article page.
    pub url: String,
    /// Raw `<pubDate>` text, or [`UNKNOWN_DATE`].
    pub date: String,
}

/// Text scraped from one article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub title: String,
    pub url: String,
    /// Lead and body separated by a blank line, or the body alone.
    pub content: String,
}

impl ArticleContent {
    /// Record returned when the page could not be fetched.
    pub fn unavailable(url: &str) -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            url: url.to_string(),
            content: String::new(),
        }
    }

    /// Assemble an article from independently located regions, filling
    /// defaults for the ones that were not found.
    pub fn compose(
        url: &str,
        title: Option<String>,
        lead: Option<String>,
        body: Option<String>,
    ) -> Self {
        let title = title.unwrap_or_else(|| UNKNOWN_TITLE.to_string());
        let lead = lead.unwrap_or_default();
        let body = body.unwrap_or_default();

        let content = if lead.is_empty() {
            body
        } else {
            format!("{lead}\n\n{body}")
        };

        Self {
            title,
            url: url.to_string(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_serialize_with_site_field_names() {
        let json = serde_json::to_string(&SearchFilters::default()).unwrap();
        assert_eq!(
            json,
            r#"{"and_tags":[],"superTags":[],"authors":[],"title":[]}"#
        );
    }

    #[test]
    fn test_filters_query_param_round_trip() {
        let filters = SearchFilters::default();
        let encoded = filters.to_query_param().unwrap();
        assert!(!encoded.contains('{'));
        assert!(!encoded.contains('"'));

        let decoded = urlencoding::decode(&encoded).unwrap();
        let parsed: SearchFilters = serde_json::from_str(&decoded).unwrap();
        assert_eq!(parsed, filters);
    }

    #[test]
    fn test_filters_keep_non_ascii_before_encoding() {
        let mut filters = SearchFilters::default();
        filters.authors.insert("Szabó Ágnes".to_string());

        let decoded = urlencoding::decode(&filters.to_query_param().unwrap())
            .unwrap()
            .into_owned();
        assert!(decoded.contains("Szabó Ágnes"));
        let parsed: SearchFilters = serde_json::from_str(&decoded).unwrap();
        assert_eq!(parsed, filters);
    }

    #[test]
    fn test_compose_with_lead() {
        let article = ArticleContent::compose(
            "https://telex.hu/a",
            Some("Cím".to_string()),
            Some("Lead".to_string()),
            Some("Body".to_string()),
        );
        assert_eq!(article.title, "Cím");
        assert_eq!(article.content, "Lead\n\nBody");
    }

    #[test]
    fn test_compose_without_lead() {
        let article = ArticleContent::compose("https://telex.hu/a", None, None, Some("Body".to_string()));
        assert_eq!(article.title, UNKNOWN_TITLE);
        assert_eq!(article.content, "Body");

        let empty_lead =
            ArticleContent::compose("https://telex.hu/a", None, Some(String::new()), Some("Body".to_string()));
        assert_eq!(empty_lead.content, "Body");
    }

    #[test]
    fn test_unavailable() {
        let article = ArticleContent::unavailable("https://telex.hu/b");
        assert_eq!(
            article,
            ArticleContent {
                title: "Unknown Title".to_string(),
                url: "https://telex.hu/b".to_string(),
                content: String::new(),
            }
        );
    }

    #[test]
    fn test_article_summary_serialization() {
        let summary = ArticleSummary {
            title: "Hír".to_string(),
            url: "https://telex.hu/belfold/2024/01/01/hir".to_string(),
            date: UNKNOWN_DATE.to_string(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""date":"Unknown Date""#));
        let back: ArticleSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
