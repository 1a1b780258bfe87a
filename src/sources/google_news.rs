use std::time::Duration;

use reqwest::blocking::Client;

use crate::errors::DigestResult;
use crate::sources::traits::FeedFetcher;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

pub struct GoogleNewsFetcher {
    client: Client,
}

impl GoogleNewsFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for GoogleNewsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedFetcher for GoogleNewsFetcher {
    fn fetch(&self, url: &str) -> DigestResult<String> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}
