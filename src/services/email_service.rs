use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::config::SmtpConfig;
use crate::errors::DigestResult;

pub const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

pub struct EmailService {
    config: SmtpConfig,
}

impl EmailService {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build the single-part plain text message
    pub fn compose(&self, subject: &str, body: &str) -> DigestResult<Message> {
        let from = self.config.sender.parse::<Mailbox>()?;
        let to = self.config.recipient.parse::<Mailbox>()?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        Ok(message)
    }

    /// Send over STARTTLS with the configured credentials. No retry.
    pub fn send(&self, subject: &str, body: &str) -> DigestResult<()> {
        let message = self.compose(subject, body)?;

        let mailer = SmtpTransport::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        mailer.send(&message)?;

        info!(
            host = %self.config.host,
            port = self.config.port,
            recipient = %self.config.recipient,
            "Digest email sent"
        );

        Ok(())
    }
}
