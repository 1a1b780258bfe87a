use clap::Parser;
use tracing_subscriber::EnvFilter;

use chipdigest::cli::Cli;
use chipdigest::config::{DigestConfig, SmtpConfig};
use chipdigest::errors::DigestResult;
use chipdigest::services::summary_service::{generated_now, subject};
use chipdigest::services::{build_summary, scheduler, DigestService, EmailService};
use chipdigest::sources::GoogleNewsFetcher;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> DigestResult<()> {
    let cli = Cli::parse();
    let config = cli.digest_config();

    // Fail on missing SMTP settings before any feed is fetched
    let email_service = if !cli.dry_run {
        Some(EmailService::new(SmtpConfig::from_env()?))
    } else {
        None
    };

    if cli.run_once {
        cmd_run(config, email_service.as_ref())
    } else {
        scheduler::run_forever(|| cmd_run(config, email_service.as_ref()))
    }
}

fn cmd_run(config: DigestConfig, email_service: Option<&EmailService>) -> DigestResult<()> {
    let service = DigestService::new(GoogleNewsFetcher::new(), config);
    let run = service.fetch_articles()?;

    let generated_at = generated_now();
    let summary = build_summary(&run.articles, config.lookback_hours, &generated_at);

    match email_service {
        None => {
            println!("{}", summary);
        }
        Some(email_service) => {
            email_service.send(&subject(&generated_at), &summary)?;
            println!("Sent summary email with {} article(s).", run.articles.len());
        }
    }

    Ok(())
}
