use chrono::{DateTime, Utc};

use super::Topic;

/// One `<item>` as read from a search feed, before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

impl FeedItem {
    pub fn new(link: String) -> Self {
        Self {
            title: String::new(),
            link,
            published: None,
            source: None,
        }
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    pub fn with_published(mut self, published: Option<DateTime<Utc>>) -> Self {
        self.published = published;
        self
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub source: String,
    pub published: DateTime<Utc>,
    pub topic: Topic,
}

impl Article {
    pub const UNTITLED: &'static str = "(no title)";
    pub const UNKNOWN_SOURCE: &'static str = "Unknown";

    /// Classify a dated feed item under the topic of the query that found it.
    pub fn from_item(item: FeedItem, published: DateTime<Utc>, topic: Topic) -> Self {
        let title = if item.title.is_empty() {
            Self::UNTITLED.to_string()
        } else {
            item.title
        };

        let source = item
            .source
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::UNKNOWN_SOURCE.to_string());

        Self {
            title,
            link: item.link,
            source,
            published,
            topic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_item_fills_placeholders() {
        let published = Utc.with_ymd_and_hms(2024, 10, 10, 14, 0, 0).unwrap();
        let item = FeedItem::new("https://example.com/a".to_string());

        let article = Article::from_item(item, published, Topic::Finance);

        assert_eq!(article.title, "(no title)");
        assert_eq!(article.source, "Unknown");
        assert_eq!(article.link, "https://example.com/a");
        assert_eq!(article.topic, Topic::Finance);
    }

    #[test]
    fn test_from_item_keeps_fields() {
        let published = Utc.with_ymd_and_hms(2024, 10, 10, 14, 0, 0).unwrap();
        let item = FeedItem::new("https://example.com/b".to_string())
            .with_title("TSMC posts record revenue".to_string())
            .with_source(Some("Reuters".to_string()))
            .with_published(Some(published));

        let article = Article::from_item(item, published, Topic::Earnings);

        assert_eq!(article.title, "TSMC posts record revenue");
        assert_eq!(article.source, "Reuters");
        assert_eq!(article.published, published);
    }
}
