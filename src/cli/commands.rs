use clap::Parser;

use crate::config::{
    DigestConfig, DEFAULT_LOOKBACK_HOURS, DEFAULT_MAX_ARTICLES, MAX_LOOKBACK_HOURS,
};

#[derive(Parser, Debug)]
#[command(name = "chipdigest")]
#[command(about = "Send daily semiconductor news summary email")]
#[command(version)]
pub struct Cli {
    /// Run immediately and exit
    #[arg(long)]
    pub run_once: bool,

    /// Fetch and print summary without sending email
    #[arg(long)]
    pub dry_run: bool,

    /// Cap total articles in the digest
    #[arg(long, default_value_t = DEFAULT_MAX_ARTICLES)]
    pub max_articles: usize,

    /// Only keep articles published within this many hours
    #[arg(
        long,
        env = "DIGEST_LOOKBACK_HOURS",
        default_value_t = DEFAULT_LOOKBACK_HOURS,
        value_parser = clap::value_parser!(i64).range(1..=MAX_LOOKBACK_HOURS)
    )]
    pub lookback_hours: i64,
}

impl Cli {
    pub fn digest_config(&self) -> DigestConfig {
        DigestConfig::new(self.lookback_hours, self.max_articles)
    }
}
