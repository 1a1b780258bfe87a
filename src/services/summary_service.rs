use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::config::DISPLAY_TZ;
use crate::domain::{Article, Topic};

pub const DIGEST_TITLE: &str = "Semiconductor Daily Digest";

/// Max earnings articles in the spotlight section
pub const SPOTLIGHT_LIMIT: usize = 10;
/// Max articles per topic in the detailed section
pub const TOPIC_LIMIT: usize = 8;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M %Z";

/// Render a timestamp in the display zone
pub fn display_time<Z: TimeZone>(dt: &DateTime<Z>) -> String {
    dt.with_timezone(&DISPLAY_TZ)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Email subject for a digest generated at `generated_at`
pub fn subject(generated_at: &DateTime<Tz>) -> String {
    format!(
        "{} - {}",
        DIGEST_TITLE,
        generated_at.with_timezone(&DISPLAY_TZ).format("%Y-%m-%d")
    )
}

/// Build the plain-text digest body.
///
/// `articles` is expected newest first; that order is kept inside each
/// topic section.
pub fn build_summary(articles: &[Article], lookback_hours: i64, generated_at: &DateTime<Tz>) -> String {
    let generated_at = display_time(generated_at);

    if articles.is_empty() {
        return format!(
            "{} ({})\n\nNo qualifying articles found in the last {} hours.",
            DIGEST_TITLE, generated_at, lookback_hours
        );
    }

    let mut by_topic: HashMap<Topic, Vec<&Article>> = HashMap::new();
    for article in articles {
        by_topic.entry(article.topic).or_default().push(article);
    }
    let topic_articles = |topic: Topic| by_topic.get(&topic).map(Vec::as_slice).unwrap_or(&[]);

    let mut lines = vec![
        format!("{} ({})", DIGEST_TITLE, generated_at),
        format!(
            "Collected {} article(s) from the last {} hours.",
            articles.len(),
            lookback_hours
        ),
        String::new(),
        "Topline by category:".to_string(),
    ];

    for topic in Topic::ALL {
        lines.push(format!("- {}: {} article(s)", topic, topic_articles(topic).len()));
    }

    let earnings = topic_articles(Topic::Earnings);
    if !earnings.is_empty() {
        lines.push("\nEarnings spotlight (semiconductor companies):".to_string());
        for article in earnings.iter().take(SPOTLIGHT_LIMIT) {
            push_article(&mut lines, article);
        }
    }

    lines.push("\nDetailed highlights:".to_string());
    for topic in Topic::ALL {
        let section = topic_articles(topic);
        if section.is_empty() {
            continue;
        }

        lines.push(format!("\n{}", topic));
        lines.push("-".repeat(topic.as_str().len()));
        for article in section.iter().take(TOPIC_LIMIT) {
            push_article(&mut lines, article);
        }
    }

    lines.join("\n")
}

fn push_article(lines: &mut Vec<String>, article: &Article) {
    lines.push(format!("• {}", article.title));
    lines.push(format!(
        "  Source: {} | Published: {}",
        article.source,
        display_time(&article.published)
    ));
    lines.push(format!("  Link: {}", article.link));
}

/// Current time in the display zone
pub fn generated_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&DISPLAY_TZ)
}
