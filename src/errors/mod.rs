use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Delivery errors
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email: {0}")]
    Email(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    // Scheduling errors
    #[error("Scheduling error: {0}")]
    Schedule(String),
}

pub type DigestResult<T> = Result<T, DigestError>;
