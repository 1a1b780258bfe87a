use chrono_tz::Tz;

use crate::errors::{DigestError, DigestResult};

/// Zone used for scheduling and for every rendered timestamp
pub const DISPLAY_TZ: Tz = chrono_tz::America::Los_Angeles;

pub const DEFAULT_LOOKBACK_HOURS: i64 = 24;
/// One year
pub const MAX_LOOKBACK_HOURS: i64 = 8760;
pub const DEFAULT_MAX_ARTICLES: usize = 60;
pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestConfig {
    pub lookback_hours: i64,
    pub max_articles: usize,
}

impl DigestConfig {
    pub fn new(lookback_hours: i64, max_articles: usize) -> Self {
        Self {
            lookback_hours,
            max_articles,
        }
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKBACK_HOURS, DEFAULT_MAX_ARTICLES)
    }
}

#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sender: String,
    pub recipient: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("sender", &self.sender)
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl SmtpConfig {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> DigestResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset,
    /// and every missing required variable is reported in one error.
    pub fn from_lookup<F>(lookup: F) -> DigestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("SMTP_HOST");
        let username = get("SMTP_USER");
        let password = get("SMTP_PASSWORD");
        let recipient = get("EMAIL_RECIPIENT");

        let missing: Vec<String> = [
            ("SMTP_HOST", host.is_none()),
            ("SMTP_USER", username.is_none()),
            ("SMTP_PASSWORD", password.is_none()),
            ("EMAIL_RECIPIENT", recipient.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| name.to_string())
        .collect();

        let (Some(host), Some(username), Some(password), Some(recipient)) =
            (host, username, password, recipient)
        else {
            return Err(DigestError::MissingEnvVars(missing));
        };

        let port = match get("SMTP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                DigestError::Config(format!("SMTP_PORT must be a port number, got '{}'", raw))
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        let sender = get("EMAIL_SENDER").unwrap_or_else(|| username.clone());

        Ok(Self {
            host,
            port,
            username,
            password,
            sender,
            recipient,
        })
    }
}
