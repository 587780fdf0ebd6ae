// --- File: crates/tibenkana_mailer/src/lib.rs ---
pub mod error;
pub mod invite;
pub mod service;
pub mod template;
pub mod transport;

pub use error::NotificationError;
pub use invite::calendar_link;
pub use service::EmailNotificationService;
pub use transport::{EmailMessage, MailTransport, SmtpMailTransport};
