pub mod google_news;
pub mod queries;
pub mod rss;
pub mod traits;

pub use google_news::GoogleNewsFetcher;
pub use queries::{search_url, topic_queries};
pub use rss::try_parse_items;
pub use traits::FeedFetcher;
