//! Outbound email dispatch.
//!
//! This crate is the boundary between the submission pipeline and the mail
//! service: a small [`Mailer`] trait plus an SMTP implementation built on
//! [lettre](https://lettre.rs). There is no retry, queuing, or delivery
//! tracking here; each send is a single attempt against the relay.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Errors that can occur while building or sending an email.
///
/// Transport-level errors are carried as strings so callers (and test
/// doubles) do not need to construct lettre error values.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),
    #[error("failed to build message: {0}")]
    Build(String),
    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// A fully rendered email ready for dispatch.
///
/// Both bodies are always present; the SMTP implementation sends them as a
/// `multipart/alternative` message so clients pick whichever they support.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    /// Display name for the `From` header.
    pub from_name: String,
    /// Sender address.
    pub from_address: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plaintext body.
    pub text: String,
    /// HTML body.
    pub html: String,
}

/// Sends rendered emails through an external mail service.
///
/// The submission pipeline holds a `dyn Mailer`, so tests can swap in an
/// in-memory recorder instead of a live SMTP connection.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Dispatches a single email.
    ///
    /// # Errors
    ///
    /// Returns a `MailError` if the addresses are malformed, the message
    /// cannot be assembled, or the transport rejects the send.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// SMTP-backed [`Mailer`] using a STARTTLS relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Creates a mailer for the given relay.
    ///
    /// # Arguments
    ///
    /// * `host` - SMTP relay hostname
    /// * `port` - relay port (587 for STARTTLS in the common case)
    /// * `credentials` - optional username/password pair for authentication
    ///
    /// # Errors
    ///
    /// Returns `MailError::Smtp` if the relay configuration is invalid.
    pub fn new(
        host: &str,
        port: u16,
        credentials: Option<(String, String)>,
    ) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(port);

        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let from = Mailbox::new(
            Some(email.from_name.clone()),
            email
                .from_address
                .parse()
                .map_err(|e| MailError::InvalidAddress(format!("{}: {e}", email.from_address)))?,
        );
        let to = Mailbox::new(
            None,
            email
                .to
                .parse()
                .map_err(|e| MailError::InvalidAddress(format!("{}: {e}", email.to)))?,
        );

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(&email.subject)
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .map_err(|e| MailError::Build(e.to_string()))?;

        tracing::debug!("dispatching email to {} ({})", email.to, email.subject);
        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| MailError::Smtp(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn smtp_mailer_builds_without_credentials() {
        assert!(SmtpMailer::new("smtp.gmail.com", 587, None).is_ok());
    }

    #[tokio::test]
    async fn smtp_mailer_builds_with_credentials() {
        let creds = Some(("user".to_string(), "password".to_string()));
        assert!(SmtpMailer::new("smtp.example.com", 2525, creds).is_ok());
    }
}
