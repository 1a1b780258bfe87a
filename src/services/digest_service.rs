use std::collections::HashSet;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};

use crate::config::DigestConfig;
use crate::domain::{Article, FeedItem};
use crate::errors::{DigestError, DigestResult};
use crate::sources::{search_url, topic_queries, try_parse_items, FeedFetcher};

/// Outcome of one pipeline pass
#[derive(Debug, Clone, Default)]
pub struct DigestRun {
    pub articles: Vec<Article>,
    pub queries: usize,
    pub failed_queries: usize,
}

pub struct DigestService<F: FeedFetcher> {
    fetcher: F,
    config: DigestConfig,
}

impl<F: FeedFetcher> DigestService<F> {
    pub fn new(fetcher: F, config: DigestConfig) -> Self {
        Self { fetcher, config }
    }

    /// Fetch, deduplicate, filter and rank articles relative to the current time
    pub fn fetch_articles(&self) -> DigestResult<DigestRun> {
        self.fetch_articles_at(Utc::now())
    }

    pub fn fetch_articles_at(&self, now: DateTime<Utc>) -> DigestResult<DigestRun> {
        let cutoff = self.cutoff(now)?;
        let mut seen: HashSet<String> = HashSet::new();
        let mut run = DigestRun::default();

        for (topic, query) in topic_queries() {
            run.queries += 1;

            // Failed queries count as empty results
            let items = match self.fetch_query(&query) {
                Ok(items) => items,
                Err(e) => {
                    debug!(%query, error = %e, "Query failed");
                    run.failed_queries += 1;
                    continue;
                }
            };

            for item in items {
                if seen.contains(&item.link) {
                    continue;
                }

                let published = match item.published {
                    Some(published) if published >= cutoff => published,
                    _ => continue,
                };

                seen.insert(item.link.clone());
                run.articles.push(Article::from_item(item, published, topic));
            }
        }

        // Stable, so equal timestamps keep discovery order
        run.articles.sort_by(|a, b| b.published.cmp(&a.published));
        run.articles.truncate(self.config.max_articles);

        info!(
            queries = run.queries,
            failed = run.failed_queries,
            articles = run.articles.len(),
            "Digest collection finished"
        );

        Ok(run)
    }

    /// Oldest publish time still inside the lookback window
    fn cutoff(&self, now: DateTime<Utc>) -> DigestResult<DateTime<Utc>> {
        let hours = self.config.lookback_hours;

        TimeDelta::try_hours(hours)
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| {
                DigestError::Config(format!("lookback of {} hours is out of range", hours))
            })
    }

    fn fetch_query(&self, query: &str) -> DigestResult<Vec<FeedItem>> {
        let body = self.fetcher.fetch(&search_url(query))?;
        if body.is_empty() {
            return Ok(Vec::new());
        }
        try_parse_items(&body)
    }
}
