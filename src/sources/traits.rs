use crate::errors::DigestResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher {
    /// Fetch the raw feed body for a fully-formed search URL
    fn fetch(&self, url: &str) -> DigestResult<String>;
}
