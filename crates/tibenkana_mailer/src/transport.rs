// --- File: crates/tibenkana_mailer/src/transport.rs ---
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::error::NotificationError;
use tibenkana_common::BoxFuture;
use tibenkana_config::SmtpConfig;

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Delivers an [`EmailMessage`]. One attempt, no retries.
pub trait MailTransport: Send + Sync {
    fn send<'a>(&'a self, message: &'a EmailMessage) -> BoxFuture<'a, (), NotificationError>;
}

/// SMTP delivery through lettre.
///
/// Port 465 uses implicit TLS, 587 uses STARTTLS, any other port talks
/// plain SMTP (local relays and test servers).
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    pub fn from_config(config: &SmtpConfig) -> Result<Self, NotificationError> {
        if !config.is_complete() {
            return Err(NotificationError::NotConfigured(
                "smtp host, port, user, password and from are all required".to_string(),
            ));
        }
        let host = config.host.clone().unwrap_or_default();
        let port = config.port.unwrap_or(25);
        let credentials = Credentials::new(
            config.user.clone().unwrap_or_default(),
            config.password.clone().unwrap_or_default(),
        );

        let builder = match port {
            465 => AsyncSmtpTransport::<Tokio1Executor>::relay(&host),
            587 => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host),
            _ => Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&host)),
        }
        .map_err(|e| NotificationError::Transport(e.to_string()))?;

        let mailer = builder.port(port).credentials(credentials).build();
        debug!("SMTP transport prepared for {}:{}", host, port);
        Ok(Self { mailer })
    }
}

fn mailbox(address: &str) -> Result<Mailbox, NotificationError> {
    address.parse().map_err(|e: lettre::address::AddressError| NotificationError::Address {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Turn an [`EmailMessage`] into a lettre message with an HTML body.
pub fn build_message(message: &EmailMessage) -> Result<Message, NotificationError> {
    let mut builder = Message::builder()
        .from(mailbox(&message.from)?)
        .subject(message.subject.clone());
    for to in &message.to {
        builder = builder.to(mailbox(to)?);
    }
    builder
        .header(ContentType::TEXT_HTML)
        .body(message.html.clone())
        .map_err(|e| NotificationError::Build(e.to_string()))
}

impl MailTransport for SmtpMailTransport {
    fn send<'a>(&'a self, message: &'a EmailMessage) -> BoxFuture<'a, (), NotificationError> {
        Box::pin(async move {
            let email = build_message(message)?;
            self.mailer
                .send(email)
                .await
                .map(|_| ())
                .map_err(|e| NotificationError::Transport(e.to_string()))
        })
    }
}
