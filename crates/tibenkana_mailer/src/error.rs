// --- File: crates/tibenkana_mailer/src/error.rs ---
use thiserror::Error;
use tibenkana_common::TibenkanaError;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Mail transport not configured: {0}")]
    NotConfigured(String),
    #[error("Invalid mail address '{address}': {reason}")]
    Address { address: String, reason: String },
    #[error("Failed to build message: {0}")]
    Build(String),
    #[error("SMTP transport error: {0}")]
    Transport(String),
}

impl From<NotificationError> for TibenkanaError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::NotConfigured(msg) => TibenkanaError::Config(msg),
            other => TibenkanaError::Notification(other.to_string()),
        }
    }
}
