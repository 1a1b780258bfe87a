use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::FeedItem;
use crate::errors::{DigestError, DigestResult};

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
    #[serde(default)]
    source: Option<RssSource>,
}

/// `<source url="...">Publisher</source>`
#[derive(Debug, Deserialize)]
struct RssSource {
    #[serde(rename = "$text", default)]
    name: Option<String>,
}

/// Parse the `<channel><item>` records of an RSS payload.
///
/// A malformed payload is rejected as a whole, never returned as a partial
/// list.
pub fn try_parse_items(xml: &str) -> DigestResult<Vec<FeedItem>> {
    let document: RssDocument =
        quick_xml::de::from_str(xml).map_err(|e| DigestError::FeedParse(e.to_string()))?;

    let items = document
        .channel
        .items
        .into_iter()
        .filter_map(|item| {
            let link = trimmed(item.link)?;

            Some(
                FeedItem::new(link)
                    .with_title(trimmed(item.title).unwrap_or_default())
                    .with_published(item.pub_date.as_deref().and_then(parse_pub_date))
                    .with_source(item.source.and_then(|s| trimmed(s.name))),
            )
        })
        .collect();

    Ok(items)
}

/// RFC 2822 `pubDate`, e.g. `Thu, 10 Oct 2024 14:00:00 GMT`
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse_items(xml: &str) -> Vec<FeedItem> {
        try_parse_items(xml).unwrap_or_default()
    }

    // Trimmed-down Google News search result
    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <generator>NFE/5.0</generator>
    <title>"semiconductor" strategy when:1d - Google News</title>
    <link>https://news.google.com/search?q=semiconductor</link>
    <language>en-US</language>
    <item>
      <title>TSMC &amp; partners outline 2nm roadmap - Reuters</title>
      <link>https://news.google.com/rss/articles/abc123</link>
      <guid isPermaLink="false">abc123</guid>
      <pubDate>Thu, 10 Oct 2024 14:00:00 GMT</pubDate>
      <description>&lt;a href="https://news.google.com/rss/articles/abc123"&gt;TSMC&lt;/a&gt;</description>
      <source url="https://www.reuters.com">Reuters</source>
    </item>
    <item>
      <title>  Intel unveils foundry strategy  </title>
      <link> https://news.google.com/rss/articles/def456 </link>
      <pubDate>Thu, 10 Oct 2024 09:30:00 +0200</pubDate>
    </item>
    <item>
      <title>Item without link</title>
      <pubDate>Thu, 10 Oct 2024 09:30:00 GMT</pubDate>
    </item>
    <item>
      <title>Item with a bad date</title>
      <link>https://news.google.com/rss/articles/ghi789</link>
      <pubDate>yesterday-ish</pubDate>
      <source url="https://example.com"></source>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parses_items_in_order() {
        let items = parse_items(SAMPLE_RSS);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].link, "https://news.google.com/rss/articles/abc123");
        assert_eq!(items[1].link, "https://news.google.com/rss/articles/def456");
        assert_eq!(items[2].link, "https://news.google.com/rss/articles/ghi789");
    }

    #[test]
    fn test_extracts_fields() {
        let items = parse_items(SAMPLE_RSS);

        let first = &items[0];
        assert_eq!(first.title, "TSMC & partners outline 2nm roadmap - Reuters");
        assert_eq!(first.source.as_deref(), Some("Reuters"));
        assert_eq!(
            first.published,
            Some(Utc.with_ymd_and_hms(2024, 10, 10, 14, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_trims_and_normalizes_to_utc() {
        let items = parse_items(SAMPLE_RSS);

        let second = &items[1];
        assert_eq!(second.title, "Intel unveils foundry strategy");
        assert_eq!(second.source, None);
        assert_eq!(
            second.published,
            Some(Utc.with_ymd_and_hms(2024, 10, 10, 7, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_bad_date_and_empty_source_become_absent() {
        let items = parse_items(SAMPLE_RSS);

        let third = &items[2];
        assert_eq!(third.published, None);
        assert_eq!(third.source, None);
    }

    #[test]
    fn test_malformed_payload_yields_nothing() {
        let truncated = &SAMPLE_RSS[..SAMPLE_RSS.len() / 2];

        assert!(parse_items(truncated).is_empty());
        assert!(parse_items("").is_empty());
        assert!(parse_items("<html><body>Too many requests</body></html>").is_empty());
        assert!(try_parse_items("not xml at all").is_err());
    }

    #[test]
    fn test_channel_without_items() {
        let xml = r#"<rss version="2.0"><channel><title>Empty</title></channel></rss>"#;

        let items = try_parse_items(xml).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_pub_date() {
        assert_eq!(
            parse_pub_date("Mon, 07 Oct 2024 23:15:00 GMT"),
            Some(Utc.with_ymd_and_hms(2024, 10, 7, 23, 15, 0).unwrap())
        );
        assert_eq!(parse_pub_date(""), None);
        assert_eq!(parse_pub_date("2024-10-07T23:15:00Z"), None);
    }
}
