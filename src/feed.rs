//! RSS feed page decoding.
//!
//! Every `<item>` in the document is collected, wherever it sits. Inside an
//! item the first `<title>`, `<link>` and `<pubDate>` win; prefixed
//! extensions such as `<atom:link>` are ignored. Fields stay optional so the
//! caller decides what a missing `<title>` or `<link>` means.
//!
//! Decoding never fails. A body that is not XML, or XML that breaks off
//! halfway, yields the items completed before the break.

use crate::error::TelexError;
use crate::models::{ArticleSummary, UNKNOWN_DATE};
use quick_xml::Reader;
use quick_xml::escape::{resolve_html5_entity, resolve_predefined_entity};
use quick_xml::events::Event;
use tracing::warn;

/// One `<item>` as found in the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<String>,
}

impl FeedItem {
    /// Convert into a summary. `page` and `index` locate the item for the
    /// error raised when `title` or `link` is missing.
    pub fn into_summary(self, page: u32, index: usize) -> Result<ArticleSummary, TelexError> {
        let missing = |field| TelexError::MalformedItem { page, index, field };

        Ok(ArticleSummary {
            title: self.title.ok_or_else(|| missing("title"))?,
            url: self.link.ok_or_else(|| missing("link"))?,
            date: self.pub_date.unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        })
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            Field::PubDate => &mut self.pub_date,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Link,
    PubDate,
}

impl Field {
    fn from_tag(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"link" => Some(Field::Link),
            b"pubDate" => Some(Field::PubDate),
            _ => None,
        }
    }
}

/// A field whose text is being collected, and the depth it closes at.
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

/// Decode a feed document into its items, in document order.
pub fn parse_items(xml: &str) -> Vec<FeedItem> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = false;

    let mut items = Vec::new();
    let mut current: Option<(FeedItem, usize)> = None;
    let mut capture: Option<Capture> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                let name = e.name();
                let tag = name.as_ref();
                if current.is_none() {
                    if tag == b"item" {
                        current = Some((FeedItem::default(), depth));
                    }
                } else if capture.is_none() {
                    if let (Some((item, _)), Some(field)) = (current.as_mut(), Field::from_tag(tag)) {
                        if item.slot(field).is_none() {
                            capture = Some(Capture {
                                field,
                                depth,
                                text: String::new(),
                            });
                        }
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                if let (Some((item, _)), None) = (&mut current, &capture) {
                    if let Some(field) = Field::from_tag(e.name().as_ref()) {
                        item.slot(field).get_or_insert_with(String::new);
                    }
                }
            }
            Ok(Event::End(_)) => {
                if capture.as_ref().is_some_and(|c| c.depth == depth) {
                    if let (Some(done), Some((item, _))) = (capture.take(), &mut current) {
                        *item.slot(done.field) = Some(done.text.trim().to_string());
                    }
                }
                if current.as_ref().is_some_and(|(_, d)| *d == depth) {
                    if let Some((item, _)) = current.take() {
                        items.push(item);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Text(ref e)) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&resolve_entity(&String::from_utf8_lossy(e)));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!(
                    position = reader.buffer_position(),
                    error = %e,
                    items = items.len(),
                    "Feed page is not well-formed XML; keeping items read so far"
                );
                break;
            }
            _ => {}
        }
    }

    items
}

/// Text for an entity reference; unknown names are kept verbatim.
fn resolve_entity(name: &str) -> String {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => num.parse().ok(),
        };
        if let Some(c) = code.and_then(char::from_u32) {
            return c.to_string();
        }
    } else if let Some(s) = resolve_predefined_entity(name).or_else(|| resolve_html5_entity(name)) {
        return s.to_string();
    }
    format!("&{name};")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>Telex archívum</title>
    <link>https://telex.hu</link>
    <description>Telex</description>
    <item>
      <title>Első cikk</title>
      <link>https://telex.hu/belfold/2024/05/01/elso</link>
      <pubDate>Wed, 01 May 2024 10:00:00 +0200</pubDate>
      <guid isPermaLink="true">https://telex.hu/belfold/2024/05/01/elso</guid>
    </item>
    <item>
      <title><![CDATA[Második & harmadik]]></title>
      <link>https://telex.hu/kulfold/2024/05/02/masodik</link>
      <description><![CDATA[<p>lead</p>]]></description>
    </item>
    <item>
      <title>Tom &amp; Jerry</title>
      <link>https://telex.hu/kult/2024/05/03/tom</link>
      <pubDate>Fri, 03 May 2024 08:30:00 +0200</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_items_in_order() {
        let items = parse_items(FEED);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title.as_deref(), Some("Első cikk"));
        assert_eq!(
            items[0].pub_date.as_deref(),
            Some("Wed, 01 May 2024 10:00:00 +0200")
        );
        assert_eq!(
            items[1].link.as_deref(),
            Some("https://telex.hu/kulfold/2024/05/02/masodik")
        );
        assert_eq!(items[1].pub_date, None);
    }

    #[test]
    fn test_parse_items_ignores_channel_fields() {
        let items = parse_items(FEED);
        assert!(items.iter().all(|i| i.link.as_deref() != Some("https://telex.hu")));
    }

    #[test]
    fn test_parse_items_decodes_cdata_and_entities() {
        let items = parse_items(FEED);
        assert_eq!(items[1].title.as_deref(), Some("Második & harmadik"));
        assert_eq!(items[2].title.as_deref(), Some("Tom & Jerry"));
    }

    #[test]
    fn test_parse_items_html_and_numeric_entities() {
        let xml = "<rss><channel><item><title>A&nbsp;B &#8211; C&#x21;</title>\
                   <link>https://telex.hu/a</link></item></channel></rss>";
        let items = parse_items(xml);
        assert_eq!(items[0].title.as_deref(), Some("A\u{a0}B \u{2013} C!"));
    }

    #[test]
    fn test_parse_items_unknown_entity_kept() {
        let xml = "<rss><channel><item><title>x &bogus; y</title></item></channel></rss>";
        assert_eq!(parse_items(xml)[0].title.as_deref(), Some("x &bogus; y"));
    }

    #[test]
    fn test_parse_items_prefixed_link_does_not_clash() {
        let xml = r#"<rss xmlns:atom="http://www.w3.org/2005/Atom"><channel><item>
            <title>Cikk</title>
            <atom:link rel="amphtml" href="https://telex.hu/amp/a"/>
            <link>https://telex.hu/a</link>
            <atom:link rel="alternate">https://telex.hu/alt/a</atom:link>
        </item></channel></rss>"#;
        let items = parse_items(xml);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link.as_deref(), Some("https://telex.hu/a"));
    }

    #[test]
    fn test_parse_items_first_field_wins() {
        let xml = "<rss><channel><item><title>Első</title><title>Második</title>\
                   <link>https://telex.hu/1</link></item></channel></rss>";
        assert_eq!(parse_items(xml)[0].title.as_deref(), Some("Első"));
    }

    #[test]
    fn test_parse_items_outside_rss_channel() {
        let xml = "<feed><item><title>T</title><link>https://telex.hu/t</link></item></feed>";
        let items = parse_items(xml);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link.as_deref(), Some("https://telex.hu/t"));
    }

    #[test]
    fn test_parse_empty_channel() {
        let xml = r#"<rss version="2.0"><channel><title>Telex</title></channel></rss>"#;
        assert!(parse_items(xml).is_empty());
    }

    #[test]
    fn test_parse_non_feed_bodies_yield_nothing() {
        assert!(parse_items("<html><body>Karbantartás</body></html>").is_empty());
        assert!(parse_items("<html><body>502 Bad Gateway").is_empty());
        assert!(parse_items("definitely not rss").is_empty());
    }

    #[test]
    fn test_parse_keeps_items_before_broken_markup() {
        let xml = "<rss><channel><item><title>Jó</title><link>https://telex.hu/j</link></item>\
                   <item><title>Félbe</title><<<";
        let items = parse_items(xml);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("Jó"));
    }

    #[test]
    fn test_into_summary_defaults_date() {
        let item = FeedItem {
            title: Some("Cím".to_string()),
            link: Some("https://telex.hu/x".to_string()),
            pub_date: None,
        };
        let summary = item.into_summary(1, 0).unwrap();
        assert_eq!(summary.date, UNKNOWN_DATE);
        assert_eq!(summary.url, "https://telex.hu/x");
    }

    #[test]
    fn test_into_summary_reports_missing_field() {
        let item = FeedItem {
            title: Some("Cím".to_string()),
            ..FeedItem::default()
        };
        let err = item.into_summary(3, 7).unwrap_err();
        assert!(matches!(
            err,
            TelexError::MalformedItem { page: 3, index: 7, field: "link" }
        ));
    }
}
