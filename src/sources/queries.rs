use url::Url;

use crate::domain::Topic;

pub const GOOGLE_NEWS_SEARCH: &str = "https://news.google.com/rss/search";

/// Industry terms paired with every non-earnings keyword
pub const SEMICONDUCTOR_TERMS: &[&str] = &[
    "semiconductor",
    "chip industry",
    "integrated circuits",
    "foundry",
];

/// Companies paired with every earnings keyword
pub const SEMICONDUCTOR_COMPANIES: &[&str] = &[
    "NVIDIA",
    "TSMC",
    "Intel",
    "Samsung Electronics",
    "AMD",
    "Qualcomm",
    "Broadcom",
    "Micron",
    "Texas Instruments",
    "SK hynix",
    "ASML",
    "Applied Materials",
    "Lam Research",
    "KLA",
    "MediaTek",
];

/// Restricts search results to the last day
const RECENCY_FILTER: &str = "when:1d";

/// Every (topic, query) pair to search, in topic then keyword order.
///
/// Pure function of the static tables, so calling it again restarts the
/// sequence from the beginning.
pub fn topic_queries() -> impl Iterator<Item = (Topic, String)> {
    Topic::ALL.into_iter().flat_map(|topic| {
        topic.keywords().iter().flat_map(move |keyword| {
            let subjects = if topic.is_company_topic() {
                SEMICONDUCTOR_COMPANIES
            } else {
                SEMICONDUCTOR_TERMS
            };

            subjects
                .iter()
                .map(move |subject| (topic, build_query(topic, subject, keyword)))
        })
    })
}

fn build_query(topic: Topic, subject: &str, keyword: &str) -> String {
    if topic.is_company_topic() {
        format!("(\"{}\") {} semiconductor {}", subject, keyword, RECENCY_FILTER)
    } else {
        format!("(\"{}\") {} {}", subject, keyword, RECENCY_FILTER)
    }
}

/// Google News RSS search URL for a query, form-encoded
pub fn search_url(query: &str) -> String {
    let params = [
        ("q", query),
        ("hl", "en-US"),
        ("gl", "US"),
        ("ceid", "US:en"),
    ];

    match Url::parse_with_params(GOOGLE_NEWS_SEARCH, params) {
        Ok(url) => url.to_string(),
        // base URL is a constant
        Err(_) => GOOGLE_NEWS_SEARCH.to_string(),
    }
}
